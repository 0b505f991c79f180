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

#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::{cell::Cell, collections::HashMap};

use crate::{certificate_der_from_pem, DecodeError, ExtensionSource};

mod registry;
mod settings;

pub(crate) const LEGAL_ENTITY: &[u8] = include_bytes!("fixtures/legal_entity.pem");
pub(crate) const NATURAL_PERSON: &[u8] = include_bytes!("fixtures/natural_person.pem");
pub(crate) const PUBLIC_OFFICIAL: &[u8] = include_bytes!("fixtures/public_official.pem");
pub(crate) const MALFORMED_FIELDS: &[u8] = include_bytes!("fixtures/malformed_fields.pem");
pub(crate) const AMBIGUOUS_TYPE: &[u8] = include_bytes!("fixtures/ambiguous_type.pem");
pub(crate) const UNTYPED: &[u8] = include_bytes!("fixtures/untyped.pem");

pub(crate) fn fixture_der(pem: &[u8]) -> Vec<u8> {
    certificate_der_from_pem(pem).unwrap()
}

/// In-memory [`ExtensionSource`] that counts how often it is asked for an
/// extension value.
#[derive(Debug, Default)]
pub(crate) struct FakeCertificate {
    values: HashMap<String, Result<String, DecodeError>>,
    policies: Vec<String>,
    reads: Cell<usize>,
}

impl FakeCertificate {
    pub(crate) fn with_value(mut self, oid: &str, value: &str) -> Self {
        self.values.insert(oid.to_string(), Ok(value.to_string()));
        self
    }

    pub(crate) fn with_malformed(mut self, oid: &str) -> Self {
        self.values.insert(
            oid.to_string(),
            Err(DecodeError::MalformedExtension {
                oid: oid.to_string(),
                reason: "truncated".to_string(),
            }),
        );
        self
    }

    pub(crate) fn with_policy(mut self, oid: &str) -> Self {
        self.policies.push(oid.to_string());
        self
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl ExtensionSource for FakeCertificate {
    fn extension_value(&self, oid: &str) -> Result<String, DecodeError> {
        self.reads.set(self.reads.get() + 1);

        match self.values.get(oid) {
            Some(result) => result.clone(),
            None => Err(DecodeError::ExtensionNotFound {
                oid: oid.to_string(),
            }),
        }
    }

    fn has_extension(&self, oid: &str) -> bool {
        self.values.contains_key(oid)
    }

    fn policy_oids(&self) -> Result<Vec<String>, DecodeError> {
        Ok(self.policies.clone())
    }
}
