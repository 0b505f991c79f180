// Copyright 2025 Ricardo Arguello and Misael Fernández. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Settings that control how certificate profiles are built and read.

use config::{Config, FileFormat};
use firmador_status_tracker::{ErrorBehavior, StatusTracker};
use serde::{Deserialize, Serialize};

use crate::{registry_for_issuer, ExtensionRegistry, ProfileError};

/// Settings for building certificate profiles.
///
/// Load from JSON or TOML with [`Settings::from_string`]. Keys that are not
/// given keep their default values.
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema), schemars(default))]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Issuer whose schema is used to read certificates (see
    /// [`ExtensionRegistry::issuer`]).
    ///
    /// The default value is `"anf_ac"`.
    pub issuer: String,

    /// Whether [`CertificateVariant::from_settings`] verifies that a
    /// certificate carries the certificate-type OID of the category it is
    /// tagged with.
    ///
    /// The default value is false.
    ///
    /// [`CertificateVariant::from_settings`]: crate::CertificateVariant::from_settings
    pub enforce_category: bool,

    /// Whether [`CertificateProfile::identity_record`] stops at the first
    /// extension that cannot be decoded.
    ///
    /// The default value is true.
    ///
    /// [`CertificateProfile::identity_record`]: crate::CertificateProfile::identity_record
    pub stop_on_first_error: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            issuer: "anf_ac".to_string(),
            enforce_category: false,
            stop_on_first_error: true,
        }
    }
}

impl Settings {
    /// Loads settings from a string representation of the configuration.
    ///
    /// `format` must be `"json"` or `"toml"`.
    pub fn from_string(settings_str: &str, format: &str) -> Result<Self, ProfileError> {
        let f = match format.to_lowercase().as_str() {
            "json" => FileFormat::Json,
            "toml" => FileFormat::Toml,
            _ => {
                return Err(ProfileError::Settings(format!(
                    "unsupported format \"{format}\""
                )))
            }
        };

        let defaults = Config::try_from(&Settings::default())
            .map_err(|e| ProfileError::Settings(e.to_string()))?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(config::File::from_str(settings_str, f))
            .build()
            .map_err(|e| ProfileError::Settings(e.to_string()))?
            .try_deserialize::<Settings>()
            .map_err(|e| ProfileError::Settings(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from TOML.
    pub fn from_toml(toml: &str) -> Result<Self, ProfileError> {
        Self::from_string(toml, "toml")
    }

    /// Loads settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        Self::from_string(json, "json")
    }

    /// Returns the registry of the configured issuer.
    pub fn registry(&self) -> Result<&'static ExtensionRegistry, ProfileError> {
        registry_for_issuer(&self.issuer)
            .ok_or_else(|| ProfileError::Settings(format!("unknown issuer \"{}\"", self.issuer)))
    }

    /// Returns the [`ErrorBehavior`] matching [`Settings::stop_on_first_error`].
    pub fn error_behavior(&self) -> ErrorBehavior {
        if self.stop_on_first_error {
            ErrorBehavior::StopOnFirstError
        } else {
            ErrorBehavior::ContinueWhenPossible
        }
    }

    /// Returns an empty [`StatusTracker`] with the configured error behavior.
    pub fn status_tracker(&self) -> StatusTracker {
        StatusTracker::with_error_behavior(self.error_behavior())
    }

    fn validate(&self) -> Result<(), ProfileError> {
        self.registry().map(|_| ())
    }
}
