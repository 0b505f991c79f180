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

//! OIDs used by ANF AC Ecuador (private enterprise number 18332) in the
//! certificates it issues.

use crate::ExtensionRegistry;

/// Certificate-type OID for natural persons (_persona natural_).
pub const NATURAL_PERSON_CERTIFICATE: &str = "1.3.6.1.4.1.18332.3.4.1.2.22";

/// Certificate-type OID for legal entities (_persona jurídica_).
pub const LEGAL_ENTITY_CERTIFICATE: &str = "1.3.6.1.4.1.18332.2.5.1.3";

/// Certificate-type OID for public officials (_funcionario público_).
pub const PUBLIC_OFFICIAL_CERTIFICATE: &str = "1.3.6.1.4.1.18332.4.1.3.22";

/// National identity card or passport number.
pub const NATIONAL_ID: &str = "1.3.6.1.4.1.18332.3.1";

/// Given names.
pub const GIVEN_NAMES: &str = "1.3.6.1.4.1.18332.3.2";

/// First surname.
pub const FIRST_SURNAME: &str = "1.3.6.1.4.1.18332.3.3";

/// Second surname.
pub const SECOND_SURNAME: &str = "1.3.6.1.4.1.18332.3.4";

/// Role or position.
pub const POSITION: &str = "1.3.6.1.4.1.18332.3.5";

/// Institution.
pub const INSTITUTION: &str = "1.3.6.1.4.1.18332.3.6";

/// Address.
pub const ADDRESS: &str = "1.3.6.1.4.1.18332.3.7";

/// Phone number.
pub const PHONE: &str = "1.3.6.1.4.1.18332.3.8";

/// City.
pub const CITY: &str = "1.3.6.1.4.1.18332.3.9";

/// Business name.
pub const BUSINESS_NAME: &str = "1.3.6.1.4.1.18332.3.10";

/// Tax ID (RUC).
pub const TAX_ID: &str = "1.3.6.1.4.1.18332.3.11";

/// Country.
pub const COUNTRY: &str = "1.3.6.1.4.1.18332.3.12";

/// Container.
pub const CONTAINER: &str = "1.3.6.1.4.1.18332.19";

/// The ANF AC Ecuador certificate schema.
pub static REGISTRY: ExtensionRegistry = ExtensionRegistry {
    issuer: "anf_ac",
    natural_person: NATURAL_PERSON_CERTIFICATE,
    legal_entity: LEGAL_ENTITY_CERTIFICATE,
    public_official: PUBLIC_OFFICIAL_CERTIFICATE,
    national_id: NATIONAL_ID,
    given_names: GIVEN_NAMES,
    first_surname: FIRST_SURNAME,
    second_surname: SECOND_SURNAME,
    position: POSITION,
    institution: INSTITUTION,
    address: ADDRESS,
    phone: PHONE,
    city: CITY,
    business_name: BUSINESS_NAME,
    tax_id: TAX_ID,
    country: COUNTRY,
    container: CONTAINER,
};
