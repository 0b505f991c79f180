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

use thiserror::Error;

use crate::CertificateCategory;

/// Describes errors reported by an [`ExtensionSource`] when it is asked for
/// the value of an extension.
///
/// [`ExtensionSource`]: crate::ExtensionSource
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// The certificate has no extension with this OID.
    ///
    /// Certificate profiles read this condition as an empty field; it is
    /// never surfaced through a field accessor.
    #[error("extension {oid} not found")]
    ExtensionNotFound {
        /// Dotted-decimal OID of the requested extension.
        oid: String,
    },

    /// The extension is present but its value is not a well-formed DER
    /// string.
    #[error("extension {oid} is malformed ({reason})")]
    MalformedExtension {
        /// Dotted-decimal OID of the extension.
        oid: String,

        /// Description of the decoding failure.
        reason: String,
    },

    /// The extension is present and well-formed DER, but does not hold one of
    /// the ASN.1 string types.
    #[error("extension {oid} holds an unsupported value (ASN.1 tag {tag})")]
    UnsupportedValueType {
        /// Dotted-decimal OID of the extension.
        oid: String,

        /// ASN.1 tag number of the value that was found.
        tag: u32,
    },

    /// The bytes presented are not a valid X.509 certificate.
    #[error("the certificate is invalid ({0})")]
    InvalidCertificate(String),
}

/// Describes errors that can occur when reading identity attributes through
/// a [`CertificateProfile`] or [`CertificateVariant`].
///
/// [`CertificateProfile`]: crate::CertificateProfile
/// [`CertificateVariant`]: crate::CertificateVariant
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum ProfileError {
    /// An extension could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The certificate does not carry the certificate-type OID of the
    /// category it was asserted to belong to.
    #[error("the certificate is not a {category} certificate (type OID {oid} missing)")]
    CategoryMismatch {
        /// The asserted category.
        category: CertificateCategory,

        /// The certificate-type OID that was expected.
        oid: &'static str,
    },

    /// The certificate carries the certificate-type OIDs of more than one
    /// category.
    #[error("the certificate carries more than one certificate type: {0:?}")]
    AmbiguousCategory(Vec<CertificateCategory>),

    /// The settings could not be parsed or name an unknown issuer.
    #[error("invalid settings ({0})")]
    Settings(String),
}
