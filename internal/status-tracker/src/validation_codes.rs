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

//! Status codes attached to [`LogItem`]s produced while reading identity
//! fields from a certificate.
//!
//! [`LogItem`]: crate::LogItem

// -- success codes --

/// The extension for a registered field is present and its value decoded.
pub const EXTENSION_PRESENT: &str = "certificate.extension.present";

/// The certificate carries the certificate-type OID of the asserted
/// category.
pub const CATEGORY_MATCH: &str = "certificate.category.match";

// -- informational codes --

/// The extension for a registered field is not present. The field reads as
/// the empty string.
pub const EXTENSION_ABSENT: &str = "certificate.extension.absent";

// -- failure codes --

/// The extension for a registered field is present but its value could not
/// be decoded.
pub const EXTENSION_MALFORMED: &str = "certificate.extension.malformed";

/// The certificate does not carry the certificate-type OID of the asserted
/// category.
pub const CATEGORY_MISMATCH: &str = "certificate.category.mismatch";
