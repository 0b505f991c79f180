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

use std::fmt::{self, Debug, Formatter};

use firmador_status_tracker::{
    log_item,
    validation_codes::{EXTENSION_ABSENT, EXTENSION_MALFORMED, EXTENSION_PRESENT},
    StatusTracker,
};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    anf_ac, registry::CONTAINER, CertificateCategory, DecodeError, ExtensionRegistry,
    ExtensionSource, IdentityField, ProfileError,
};

/// Reads the identity attributes of one certificate through an issuer's
/// [`ExtensionRegistry`].
///
/// Every accessor returns the decoded value of its extension, or an empty
/// string when the certificate does not carry that extension. An extension
/// that is present but cannot be decoded is reported as
/// [`ProfileError::Decode`].
///
/// The profile borrows the certificate and never modifies it, so any number
/// of profiles may share one certificate.
pub struct CertificateProfile<'a, C: ?Sized> {
    certificate: &'a C,
    registry: &'static ExtensionRegistry,
}

impl<'a, C: ExtensionSource + ?Sized> CertificateProfile<'a, C> {
    /// Creates a profile over `certificate` using the ANF AC Ecuador schema.
    pub fn new(certificate: &'a C) -> Self {
        Self::with_registry(certificate, &anf_ac::REGISTRY)
    }

    /// Creates a profile over `certificate` using another issuer's schema.
    pub fn with_registry(certificate: &'a C, registry: &'static ExtensionRegistry) -> Self {
        Self {
            certificate,
            registry,
        }
    }

    /// Returns the certificate this profile reads from.
    pub fn certificate(&self) -> &'a C {
        self.certificate
    }

    /// Returns the issuer schema this profile reads with.
    pub fn registry(&self) -> &'static ExtensionRegistry {
        self.registry
    }

    /// National identity card or passport number.
    pub fn national_id(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::NationalId)
    }

    /// Given names.
    pub fn given_names(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::GivenNames)
    }

    /// First surname.
    pub fn first_surname(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::FirstSurname)
    }

    /// Second surname.
    pub fn second_surname(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::SecondSurname)
    }

    /// Role or position.
    pub fn position(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::Position)
    }

    /// Institution.
    pub fn institution(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::Institution)
    }

    /// Address.
    pub fn address(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::Address)
    }

    /// Phone number.
    pub fn phone(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::Phone)
    }

    /// City.
    pub fn city(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::City)
    }

    /// Business name of a legal entity.
    pub fn business_name(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::BusinessName)
    }

    /// Tax ID (RUC).
    pub fn tax_id(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::TaxId)
    }

    /// Country.
    pub fn country(&self) -> Result<String, ProfileError> {
        self.field(IdentityField::Country)
    }

    /// Value of the container extension.
    pub fn container(&self) -> Result<String, ProfileError> {
        self.resolve_extension(self.registry.container)
    }

    /// Reads `field` through the registry.
    pub fn field(&self, field: IdentityField) -> Result<String, ProfileError> {
        self.resolve_extension(self.registry.field_oid(field))
    }

    /// Reads the extension identified by `oid`, returning an empty string if
    /// it is absent.
    pub fn resolve_extension(&self, oid: &str) -> Result<String, ProfileError> {
        Ok(self.lookup(oid)?.unwrap_or_default())
    }

    /// Returns `true` if the certificate carries the certificate-type OID of
    /// `category`.
    pub fn matches_category(&self, category: CertificateCategory) -> Result<bool, ProfileError> {
        Ok(self
            .certificate
            .carries_type_oid(self.registry.category_oid(category))?)
    }

    /// Returns every category whose certificate-type OID the certificate
    /// carries.
    pub fn categories(&self) -> Result<Vec<CertificateCategory>, ProfileError> {
        let mut categories = vec![];
        for category in CertificateCategory::ALL {
            if self.matches_category(category)? {
                categories.push(category);
            }
        }
        Ok(categories)
    }

    /// Reads every field and the container into an [`IdentityRecord`],
    /// logging what was found for each of them to `tracker`.
    ///
    /// If `tracker` stops on the first error, reading stops at the first
    /// extension that cannot be decoded. Otherwise the remaining fields are
    /// still read so that every failure is logged. In both cases a failure
    /// is returned as an error; no partial record is produced.
    pub fn identity_record(
        &self,
        tracker: &mut StatusTracker,
    ) -> Result<IdentityRecord, ProfileError> {
        let mut record = IdentityRecord::default();
        let mut first_error = None;

        for field in IdentityField::ALL {
            let oid = self.registry.field_oid(field);
            *record.field_mut(field) =
                self.logged_lookup(field.name(), oid, tracker, &mut first_error)?;
        }

        record.container =
            self.logged_lookup(CONTAINER, self.registry.container, tracker, &mut first_error)?;

        match first_error {
            Some(err) => Err(err),
            None => Ok(record),
        }
    }

    // Only place where an absent extension is told apart from a malformed
    // one.
    fn lookup(&self, oid: &str) -> Result<Option<String>, ProfileError> {
        match self.certificate.extension_value(oid) {
            Ok(value) => Ok(Some(value)),

            Err(DecodeError::ExtensionNotFound { .. }) => {
                debug!("extension {oid} not present; reading as empty");
                Ok(None)
            }

            Err(err) => {
                warn!("extension {oid} could not be decoded: {err}");
                Err(err.into())
            }
        }
    }

    fn logged_lookup(
        &self,
        label: &'static str,
        oid: &'static str,
        tracker: &mut StatusTracker,
        first_error: &mut Option<ProfileError>,
    ) -> Result<String, ProfileError> {
        match self.lookup(oid) {
            Ok(Some(value)) => {
                log_item!(label, format!("extension {oid} present"), "identity_record")
                    .validation_status(EXTENSION_PRESENT)
                    .success(tracker);

                Ok(value)
            }

            Ok(None) => {
                log_item!(label, format!("extension {oid} absent"), "identity_record")
                    .validation_status(EXTENSION_ABSENT)
                    .informational(tracker);

                Ok(String::new())
            }

            Err(err) => {
                log_item!(
                    label,
                    format!("extension {oid} could not be decoded"),
                    "identity_record"
                )
                .validation_status(EXTENSION_MALFORMED)
                .failure(tracker, err.clone())?;

                first_error.get_or_insert(err);
                Ok(String::new())
            }
        }
    }
}

impl<C: ?Sized> Clone for CertificateProfile<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for CertificateProfile<'_, C> {}

impl<C: ?Sized> Debug for CertificateProfile<'_, C> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("CertificateProfile")
            .field("issuer", &self.registry.issuer)
            .finish_non_exhaustive()
    }
}

/// All identity attributes of a certificate, as read by
/// [`CertificateProfile::identity_record`].
///
/// Absent fields are empty strings.
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct IdentityRecord {
    /// See [`IdentityField::NationalId`].
    pub national_id: String,

    /// See [`IdentityField::GivenNames`].
    pub given_names: String,

    /// See [`IdentityField::FirstSurname`].
    pub first_surname: String,

    /// See [`IdentityField::SecondSurname`].
    pub second_surname: String,

    /// See [`IdentityField::Position`].
    pub position: String,

    /// See [`IdentityField::Institution`].
    pub institution: String,

    /// See [`IdentityField::Address`].
    pub address: String,

    /// See [`IdentityField::Phone`].
    pub phone: String,

    /// See [`IdentityField::City`].
    pub city: String,

    /// See [`IdentityField::BusinessName`].
    pub business_name: String,

    /// See [`IdentityField::TaxId`].
    pub tax_id: String,

    /// See [`IdentityField::Country`].
    pub country: String,

    /// Value of the container extension.
    pub container: String,
}

impl IdentityRecord {
    /// Returns the value of `field`.
    pub fn field(&self, field: IdentityField) -> &str {
        match field {
            IdentityField::NationalId => &self.national_id,
            IdentityField::GivenNames => &self.given_names,
            IdentityField::FirstSurname => &self.first_surname,
            IdentityField::SecondSurname => &self.second_surname,
            IdentityField::Position => &self.position,
            IdentityField::Institution => &self.institution,
            IdentityField::Address => &self.address,
            IdentityField::Phone => &self.phone,
            IdentityField::City => &self.city,
            IdentityField::BusinessName => &self.business_name,
            IdentityField::TaxId => &self.tax_id,
            IdentityField::Country => &self.country,
        }
    }

    fn field_mut(&mut self, field: IdentityField) -> &mut String {
        match field {
            IdentityField::NationalId => &mut self.national_id,
            IdentityField::GivenNames => &mut self.given_names,
            IdentityField::FirstSurname => &mut self.first_surname,
            IdentityField::SecondSurname => &mut self.second_surname,
            IdentityField::Position => &mut self.position,
            IdentityField::Institution => &mut self.institution,
            IdentityField::Address => &mut self.address,
            IdentityField::Phone => &mut self.phone,
            IdentityField::City => &mut self.city,
            IdentityField::BusinessName => &mut self.business_name,
            IdentityField::TaxId => &mut self.tax_id,
            IdentityField::Country => &mut self.country,
        }
    }
}
