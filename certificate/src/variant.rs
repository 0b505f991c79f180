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

use std::{
    fmt::{self, Debug, Formatter},
    ops::Deref,
};

use firmador_status_tracker::{
    log_item,
    validation_codes::{CATEGORY_MATCH, CATEGORY_MISMATCH},
    StatusTracker,
};
use non_empty_string::NonEmptyString;

use crate::{
    settings::Settings, CertificateCategory, CertificateProfile, ExtensionSource, ProfileError,
};

/// The identity of the holder of a signing certificate, as consumed by the
/// signing and validation pipeline.
pub trait NamedIdentityHolder: Debug {
    /// Category the certificate belongs to.
    fn category(&self) -> CertificateCategory;

    /// Name of the holder suitable for display.
    ///
    /// Legal entities are named by their business name. Natural persons and
    /// public officials are named by their given names followed by their
    /// surnames.
    fn display_name(&self) -> Result<Option<NonEmptyString>, ProfileError>;

    /// Primary identifier of the holder: the RUC for legal entities, the
    /// national ID or passport number otherwise.
    fn identifier(&self) -> Result<Option<NonEmptyString>, ProfileError>;
}

/// A [`CertificateProfile`] tagged with the [`CertificateCategory`] of its
/// certificate.
///
/// A variant exposes exactly the accessors of the profile it wraps (through
/// [`Deref`]) and adds no state other than the category.
///
/// The unchecked constructors ([`new`], [`natural_person`], [`legal_entity`],
/// [`public_official`]) trust the caller's claim about the category. Use
/// [`checked`] or [`detect`] to have the claim verified against the
/// certificate-type OIDs carried by the certificate.
///
/// [`new`]: Self::new
/// [`natural_person`]: Self::natural_person
/// [`legal_entity`]: Self::legal_entity
/// [`public_official`]: Self::public_official
/// [`checked`]: Self::checked
/// [`detect`]: Self::detect
pub struct CertificateVariant<'a, C: ?Sized> {
    profile: CertificateProfile<'a, C>,
    category: CertificateCategory,
}

impl<'a, C: ExtensionSource + ?Sized> CertificateVariant<'a, C> {
    /// Tags a profile over `certificate` with `category` without checking it.
    pub fn new(certificate: &'a C, category: CertificateCategory) -> Self {
        Self::from_profile(CertificateProfile::new(certificate), category)
    }

    /// Tags an existing profile with `category` without checking it.
    pub fn from_profile(profile: CertificateProfile<'a, C>, category: CertificateCategory) -> Self {
        Self { profile, category }
    }

    /// Natural person certificate.
    pub fn natural_person(certificate: &'a C) -> Self {
        Self::new(certificate, CertificateCategory::NaturalPerson)
    }

    /// Legal entity certificate.
    pub fn legal_entity(certificate: &'a C) -> Self {
        Self::new(certificate, CertificateCategory::LegalEntity)
    }

    /// Public official certificate.
    pub fn public_official(certificate: &'a C) -> Self {
        Self::new(certificate, CertificateCategory::PublicOfficial)
    }

    /// Tags a profile over `certificate` with `category` after checking that
    /// the certificate carries the category's certificate-type OID.
    pub fn checked(certificate: &'a C, category: CertificateCategory) -> Result<Self, ProfileError> {
        Self::from_profile_checked(CertificateProfile::new(certificate), category)
    }

    /// Tags an existing profile with `category` after checking that its
    /// certificate carries the category's certificate-type OID.
    pub fn from_profile_checked(
        profile: CertificateProfile<'a, C>,
        category: CertificateCategory,
    ) -> Result<Self, ProfileError> {
        if profile.matches_category(category)? {
            Ok(Self::from_profile(profile, category))
        } else {
            Err(ProfileError::CategoryMismatch {
                category,
                oid: profile.registry().category_oid(category),
            })
        }
    }

    /// Determines the category of `certificate` from the certificate-type
    /// OIDs it carries.
    ///
    /// Returns `Ok(None)` if it carries none of them.
    pub fn detect(certificate: &'a C) -> Result<Option<Self>, ProfileError> {
        Self::detect_from_profile(CertificateProfile::new(certificate))
    }

    /// Determines the category of the certificate of an existing profile.
    pub fn detect_from_profile(
        profile: CertificateProfile<'a, C>,
    ) -> Result<Option<Self>, ProfileError> {
        match profile.categories()?.as_slice() {
            [] => Ok(None),
            [category] => Ok(Some(Self::from_profile(profile, *category))),
            categories => Err(ProfileError::AmbiguousCategory(categories.to_vec())),
        }
    }

    /// Tags a profile over `certificate` with `category`, using the issuer
    /// schema named in `settings` and checking the category only if
    /// [`Settings::enforce_category`] is set.
    pub fn from_settings(
        certificate: &'a C,
        category: CertificateCategory,
        settings: &Settings,
    ) -> Result<Self, ProfileError> {
        let profile = CertificateProfile::with_registry(certificate, settings.registry()?);

        if settings.enforce_category {
            Self::from_profile_checked(profile, category)
        } else {
            Ok(Self::from_profile(profile, category))
        }
    }

    /// Returns the category this certificate was tagged with.
    pub fn category(&self) -> CertificateCategory {
        self.category
    }

    /// Returns the wrapped profile.
    pub fn profile(&self) -> &CertificateProfile<'a, C> {
        &self.profile
    }

    /// Returns the certificate-type OID of this variant's category.
    pub fn certificate_type_oid(&self) -> &'static str {
        self.profile.registry().category_oid(self.category)
    }

    /// Checks that the certificate carries the certificate-type OID of this
    /// variant's category, logging the outcome to `tracker`.
    ///
    /// A mismatch is returned as an error only if `tracker` stops on the
    /// first error.
    pub fn verify(&self, tracker: &mut StatusTracker) -> Result<(), ProfileError> {
        let oid = self.certificate_type_oid();

        if self.profile.matches_category(self.category)? {
            log_item!(
                self.category.name(),
                format!("certificate type {oid} present"),
                "verify"
            )
            .validation_status(CATEGORY_MATCH)
            .success(tracker);

            Ok(())
        } else {
            log_item!(
                self.category.name(),
                format!("certificate type {oid} missing"),
                "verify"
            )
            .validation_status(CATEGORY_MISMATCH)
            .failure(
                tracker,
                ProfileError::CategoryMismatch {
                    category: self.category,
                    oid,
                },
            )
        }
    }

    fn person_name(&self) -> Result<String, ProfileError> {
        let parts = [
            self.profile.given_names()?,
            self.profile.first_surname()?,
            self.profile.second_surname()?,
        ];

        Ok(parts
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

impl<'a, C: ?Sized> Deref for CertificateVariant<'a, C> {
    type Target = CertificateProfile<'a, C>;

    fn deref(&self) -> &Self::Target {
        &self.profile
    }
}

impl<C: ?Sized> Clone for CertificateVariant<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for CertificateVariant<'_, C> {}

impl<C: ?Sized> Debug for CertificateVariant<'_, C> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("CertificateVariant")
            .field("profile", &self.profile)
            .field("category", &self.category)
            .finish()
    }
}

impl<C: ExtensionSource + ?Sized> NamedIdentityHolder for CertificateVariant<'_, C> {
    fn category(&self) -> CertificateCategory {
        self.category
    }

    fn display_name(&self) -> Result<Option<NonEmptyString>, ProfileError> {
        let name = match self.category {
            CertificateCategory::LegalEntity => self.profile.business_name()?,
            CertificateCategory::NaturalPerson | CertificateCategory::PublicOfficial => {
                self.person_name()?
            }
        };

        Ok(NonEmptyString::new(name.trim().to_owned()).ok())
    }

    fn identifier(&self) -> Result<Option<NonEmptyString>, ProfileError> {
        let identifier = match self.category {
            CertificateCategory::LegalEntity => self.profile.tax_id()?,
            CertificateCategory::NaturalPerson | CertificateCategory::PublicOfficial => {
                self.profile.national_id()?
            }
        };

        Ok(NonEmptyString::new(identifier.trim().to_owned()).ok())
    }
}
