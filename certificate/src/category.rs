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

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Semantic category of a certificate, as asserted by the caller or detected
/// from the certificate-type OIDs it carries.
///
/// Each issuer assigns one certificate-type OID per category (see
/// [`ExtensionRegistry::category_oid`]).
///
/// [`ExtensionRegistry::category_oid`]: crate::ExtensionRegistry::category_oid
#[cfg_attr(feature = "json_schema", derive(schemars::JsonSchema))]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateCategory {
    /// Certificate issued to an individual acting on their own behalf.
    NaturalPerson,

    /// Certificate issued to a representative of a company or other
    /// organization (_persona jurídica_).
    LegalEntity,

    /// Certificate issued to an employee of a public institution.
    PublicOfficial,
}

impl CertificateCategory {
    /// All categories, in registry order.
    pub const ALL: [CertificateCategory; 3] = [
        CertificateCategory::NaturalPerson,
        CertificateCategory::LegalEntity,
        CertificateCategory::PublicOfficial,
    ];

    /// Symbolic name used for this category's entry in an
    /// [`ExtensionRegistry`](crate::ExtensionRegistry).
    pub const fn name(self) -> &'static str {
        match self {
            Self::NaturalPerson => "natural_person",
            Self::LegalEntity => "legal_entity",
            Self::PublicOfficial => "public_official",
        }
    }
}

impl Display for CertificateCategory {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let label = match self {
            Self::NaturalPerson => "natural person",
            Self::LegalEntity => "legal entity",
            Self::PublicOfficial => "public official",
        };

        f.write_str(label)
    }
}
