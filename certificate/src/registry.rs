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

use std::iter;

use serde::{Deserialize, Serialize};

use crate::{anf_ac, CertificateCategory};

/// Symbolic name of the container entry in every registry.
pub(crate) const CONTAINER: &str = "container";

/// Registries for every issuer known to this crate.
pub static REGISTRIES: &[&ExtensionRegistry] = &[&anf_ac::REGISTRY];

/// Returns the registry whose [`issuer`](ExtensionRegistry::issuer) name
/// matches `issuer`.
pub fn registry_for_issuer(issuer: &str) -> Option<&'static ExtensionRegistry> {
    REGISTRIES
        .iter()
        .copied()
        .find(|registry| registry.issuer == issuer)
}

/// An identity attribute that issuers store as a private certificate
/// extension.
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema))]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityField {
    /// National identity card (_cédula_) or passport number.
    NationalId,

    /// Given names.
    GivenNames,

    /// First (paternal) surname.
    FirstSurname,

    /// Second (maternal) surname.
    SecondSurname,

    /// Role or position (_cargo_) held by the subject.
    Position,

    /// Institution the subject works for.
    Institution,

    /// Postal address.
    Address,

    /// Phone number.
    Phone,

    /// City.
    City,

    /// Registered business name (_razón social_) of a legal entity.
    BusinessName,

    /// Tax ID (_RUC_).
    TaxId,

    /// Country.
    Country,
}

impl IdentityField {
    /// All fields, in registry order.
    pub const ALL: [IdentityField; 12] = [
        IdentityField::NationalId,
        IdentityField::GivenNames,
        IdentityField::FirstSurname,
        IdentityField::SecondSurname,
        IdentityField::Position,
        IdentityField::Institution,
        IdentityField::Address,
        IdentityField::Phone,
        IdentityField::City,
        IdentityField::BusinessName,
        IdentityField::TaxId,
        IdentityField::Country,
    ];

    /// Symbolic name of this field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::GivenNames => "given_names",
            Self::FirstSurname => "first_surname",
            Self::SecondSurname => "second_surname",
            Self::Position => "position",
            Self::Institution => "institution",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::City => "city",
            Self::BusinessName => "business_name",
            Self::TaxId => "tax_id",
            Self::Country => "country",
        }
    }
}

/// What a [`RegistryEntry`] identifies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    /// A certificate-type OID.
    CertificateType(CertificateCategory),

    /// The extension holding an identity field.
    Field(IdentityField),

    /// The extension holding the nested container value.
    Container,
}

/// A (symbolic name, OID) pair of an [`ExtensionRegistry`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegistryEntry {
    /// Symbolic name, such as `"tax_id"`.
    pub name: &'static str,

    /// Dotted-decimal OID.
    pub oid: &'static str,

    /// What the OID identifies.
    pub kind: EntryKind,
}

/// The fixed OID vocabulary of one issuer's certificate schema.
///
/// Every symbolic name has its own field, so lookups by
/// [`IdentityField`] or [`CertificateCategory`] can never fail.
#[derive(Debug, Eq, PartialEq)]
pub struct ExtensionRegistry {
    /// Short name of the issuer, as used in [`Settings`].
    ///
    /// [`Settings`]: crate::settings::Settings
    pub issuer: &'static str,

    /// Certificate-type OID for natural persons.
    pub natural_person: &'static str,

    /// Certificate-type OID for legal entities.
    pub legal_entity: &'static str,

    /// Certificate-type OID for public officials.
    pub public_official: &'static str,

    /// See [`IdentityField::NationalId`].
    pub national_id: &'static str,

    /// See [`IdentityField::GivenNames`].
    pub given_names: &'static str,

    /// See [`IdentityField::FirstSurname`].
    pub first_surname: &'static str,

    /// See [`IdentityField::SecondSurname`].
    pub second_surname: &'static str,

    /// See [`IdentityField::Position`].
    pub position: &'static str,

    /// See [`IdentityField::Institution`].
    pub institution: &'static str,

    /// See [`IdentityField::Address`].
    pub address: &'static str,

    /// See [`IdentityField::Phone`].
    pub phone: &'static str,

    /// See [`IdentityField::City`].
    pub city: &'static str,

    /// See [`IdentityField::BusinessName`].
    pub business_name: &'static str,

    /// See [`IdentityField::TaxId`].
    pub tax_id: &'static str,

    /// See [`IdentityField::Country`].
    pub country: &'static str,

    /// Extension holding a nested structured value (_contenedor_).
    pub container: &'static str,
}

impl ExtensionRegistry {
    /// Returns the OID of the extension holding `field`.
    pub const fn field_oid(&self, field: IdentityField) -> &'static str {
        match field {
            IdentityField::NationalId => self.national_id,
            IdentityField::GivenNames => self.given_names,
            IdentityField::FirstSurname => self.first_surname,
            IdentityField::SecondSurname => self.second_surname,
            IdentityField::Position => self.position,
            IdentityField::Institution => self.institution,
            IdentityField::Address => self.address,
            IdentityField::Phone => self.phone,
            IdentityField::City => self.city,
            IdentityField::BusinessName => self.business_name,
            IdentityField::TaxId => self.tax_id,
            IdentityField::Country => self.country,
        }
    }

    /// Returns the certificate-type OID of `category`.
    pub const fn category_oid(&self, category: CertificateCategory) -> &'static str {
        match category {
            CertificateCategory::NaturalPerson => self.natural_person,
            CertificateCategory::LegalEntity => self.legal_entity,
            CertificateCategory::PublicOfficial => self.public_official,
        }
    }

    /// Returns the category whose certificate-type OID is `oid`, if any.
    pub fn category_for_oid(&self, oid: &str) -> Option<CertificateCategory> {
        CertificateCategory::ALL
            .into_iter()
            .find(|category| self.category_oid(*category) == oid)
    }

    /// Iterates over every entry: certificate types first, then fields, then
    /// the container.
    pub fn entries(&self) -> impl Iterator<Item = RegistryEntry> + '_ {
        let types = CertificateCategory::ALL
            .into_iter()
            .map(|category| RegistryEntry {
                name: category.name(),
                oid: self.category_oid(category),
                kind: EntryKind::CertificateType(category),
            });

        let fields = IdentityField::ALL.into_iter().map(|field| RegistryEntry {
            name: field.name(),
            oid: self.field_oid(field),
            kind: EntryKind::Field(field),
        });

        types.chain(fields).chain(iter::once(RegistryEntry {
            name: CONTAINER,
            oid: self.container,
            kind: EntryKind::Container,
        }))
    }

    /// Returns the OID registered under the symbolic name `name`.
    pub fn lookup(&self, name: &str) -> Option<&'static str> {
        self.entries()
            .find(|entry| entry.name == name)
            .map(|entry| entry.oid)
    }
}
