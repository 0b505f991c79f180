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

use std::collections::HashSet;

use crate::{
    anf_ac::{self, REGISTRY},
    registry_for_issuer, CertificateCategory, EntryKind, IdentityField,
};

#[test]
fn oids_are_stable() {
    assert_eq!(anf_ac::NATURAL_PERSON_CERTIFICATE, "1.3.6.1.4.1.18332.3.4.1.2.22");
    assert_eq!(anf_ac::LEGAL_ENTITY_CERTIFICATE, "1.3.6.1.4.1.18332.2.5.1.3");
    assert_eq!(anf_ac::PUBLIC_OFFICIAL_CERTIFICATE, "1.3.6.1.4.1.18332.4.1.3.22");
    assert_eq!(anf_ac::NATIONAL_ID, "1.3.6.1.4.1.18332.3.1");
    assert_eq!(anf_ac::GIVEN_NAMES, "1.3.6.1.4.1.18332.3.2");
    assert_eq!(anf_ac::FIRST_SURNAME, "1.3.6.1.4.1.18332.3.3");
    assert_eq!(anf_ac::SECOND_SURNAME, "1.3.6.1.4.1.18332.3.4");
    assert_eq!(anf_ac::POSITION, "1.3.6.1.4.1.18332.3.5");
    assert_eq!(anf_ac::INSTITUTION, "1.3.6.1.4.1.18332.3.6");
    assert_eq!(anf_ac::ADDRESS, "1.3.6.1.4.1.18332.3.7");
    assert_eq!(anf_ac::PHONE, "1.3.6.1.4.1.18332.3.8");
    assert_eq!(anf_ac::CITY, "1.3.6.1.4.1.18332.3.9");
    assert_eq!(anf_ac::BUSINESS_NAME, "1.3.6.1.4.1.18332.3.10");
    assert_eq!(anf_ac::TAX_ID, "1.3.6.1.4.1.18332.3.11");
    assert_eq!(anf_ac::COUNTRY, "1.3.6.1.4.1.18332.3.12");
    assert_eq!(anf_ac::CONTAINER, "1.3.6.1.4.1.18332.19");
}

#[test]
fn every_name_has_exactly_one_oid() {
    let entries: Vec<_> = REGISTRY.entries().collect();
    assert_eq!(entries.len(), 16);

    let names: HashSet<_> = entries.iter().map(|entry| entry.name).collect();
    assert_eq!(names.len(), entries.len());

    for entry in &entries {
        assert_eq!(REGISTRY.lookup(entry.name), Some(entry.oid));
    }
}

#[test]
fn no_two_names_share_an_oid() {
    let oids: HashSet<_> = REGISTRY.entries().map(|entry| entry.oid).collect();
    assert_eq!(oids.len(), 16);
}

#[test]
fn oids_are_dotted_decimal() {
    for entry in REGISTRY.entries() {
        let arcs: Vec<&str> = entry.oid.split('.').collect();
        assert!(arcs.len() > 2, "{} is too short", entry.oid);

        for arc in &arcs {
            assert!(
                arc.parse::<u64>().is_ok(),
                "{} has a non-numeric arc",
                entry.oid
            );
        }

        assert!(arcs[0].parse::<u64>().unwrap() <= 2);
    }
}

#[test]
fn entry_kinds() {
    let kinds: Vec<_> = REGISTRY.entries().map(|entry| entry.kind).collect();

    assert_eq!(
        &kinds[..3],
        &[
            EntryKind::CertificateType(CertificateCategory::NaturalPerson),
            EntryKind::CertificateType(CertificateCategory::LegalEntity),
            EntryKind::CertificateType(CertificateCategory::PublicOfficial),
        ]
    );

    for (kind, field) in kinds[3..15].iter().zip(IdentityField::ALL) {
        assert_eq!(kind, &EntryKind::Field(field));
    }

    assert_eq!(kinds[15], EntryKind::Container);
}

#[test]
fn field_oid() {
    assert_eq!(REGISTRY.field_oid(IdentityField::NationalId), anf_ac::NATIONAL_ID);
    assert_eq!(REGISTRY.field_oid(IdentityField::TaxId), anf_ac::TAX_ID);
    assert_eq!(
        REGISTRY.field_oid(IdentityField::BusinessName),
        anf_ac::BUSINESS_NAME
    );

    for field in IdentityField::ALL {
        assert_eq!(REGISTRY.lookup(field.name()), Some(REGISTRY.field_oid(field)));
    }
}

#[test]
fn lookup() {
    assert_eq!(REGISTRY.lookup("tax_id"), Some("1.3.6.1.4.1.18332.3.11"));
    assert_eq!(REGISTRY.lookup("container"), Some("1.3.6.1.4.1.18332.19"));
    assert_eq!(
        REGISTRY.lookup("legal_entity"),
        Some("1.3.6.1.4.1.18332.2.5.1.3")
    );
    assert_eq!(REGISTRY.lookup("nickname"), None);
}

#[test]
fn category_oids() {
    for category in CertificateCategory::ALL {
        let oid = REGISTRY.category_oid(category);
        assert_eq!(REGISTRY.category_for_oid(oid), Some(category));
    }

    assert_eq!(REGISTRY.category_for_oid(anf_ac::NATIONAL_ID), None);
    assert_eq!(REGISTRY.category_for_oid("2.5.29.32"), None);
}

#[test]
fn known_issuers() {
    let registry = registry_for_issuer("anf_ac").unwrap();
    assert!(std::ptr::eq(registry, &REGISTRY));

    assert!(registry_for_issuer("security_data").is_none());
}
