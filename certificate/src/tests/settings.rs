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

use firmador_status_tracker::ErrorBehavior;

use crate::{settings::Settings, ProfileError};

#[test]
fn defaults() {
    let settings = Settings::default();

    assert_eq!(settings.issuer, "anf_ac");
    assert!(!settings.enforce_category);
    assert_eq!(settings.error_behavior(), ErrorBehavior::StopOnFirstError);
    assert_eq!(settings.registry().unwrap().issuer, "anf_ac");
}

#[test]
fn partial_toml() {
    let settings = Settings::from_toml("enforce_category = true\n").unwrap();

    assert!(settings.enforce_category);
    assert_eq!(settings.issuer, "anf_ac");
    assert!(settings.stop_on_first_error);
}

#[test]
fn json() {
    let settings = Settings::from_json(r#"{"stop_on_first_error": false}"#).unwrap();

    assert_eq!(settings.error_behavior(), ErrorBehavior::ContinueWhenPossible);
    assert_eq!(
        *settings.status_tracker().error_behavior(),
        ErrorBehavior::ContinueWhenPossible
    );
}

#[test]
fn format_is_case_insensitive() {
    let settings = Settings::from_string(r#"issuer = "anf_ac""#, "TOML").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn unknown_issuer() {
    assert!(matches!(
        Settings::from_toml(r#"issuer = "nobody""#),
        Err(ProfileError::Settings(_))
    ));
}

#[test]
fn unsupported_format() {
    assert!(matches!(
        Settings::from_string("issuer: anf_ac", "yaml"),
        Err(ProfileError::Settings(_))
    ));
}

#[test]
fn malformed_toml() {
    assert!(matches!(
        Settings::from_toml("enforce_category = "),
        Err(ProfileError::Settings(_))
    ));
}
