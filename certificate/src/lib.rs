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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![deny(warnings)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

pub mod anf_ac;

mod category;
pub use category::CertificateCategory;

mod error;
pub use error::{DecodeError, ProfileError};

mod extension;
pub use extension::{certificate_der_from_pem, parse_certificate_der, ExtensionSource};

mod profile;
pub use profile::{CertificateProfile, IdentityRecord};

mod registry;
pub use registry::{
    registry_for_issuer, EntryKind, ExtensionRegistry, IdentityField, RegistryEntry, REGISTRIES,
};

pub mod settings;

mod variant;
pub use variant::{CertificateVariant, NamedIdentityHolder};

pub use firmador_status_tracker as status_tracker;

#[cfg(test)]
pub(crate) mod tests;
