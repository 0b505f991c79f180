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

use asn1_rs::{Any, Class, FromDer, Tag};
use log::trace;
use x509_parser::{
    certificate::X509Certificate, extensions::ParsedExtension,
    oid_registry::OID_X509_EXT_CERTIFICATE_POLICIES, pem::Pem,
};

use crate::DecodeError;

/// A certificate (or other container of X.509 extensions) that can decode
/// the string value stored in an extension.
///
/// Implemented for [`X509Certificate`]. Implement it for other certificate
/// representations to use them with [`CertificateProfile`].
///
/// [`CertificateProfile`]: crate::CertificateProfile
pub trait ExtensionSource {
    /// Returns the decoded string value of the extension identified by `oid`
    /// (dotted-decimal).
    ///
    /// Must return [`DecodeError::ExtensionNotFound`] when the extension is
    /// absent and another [`DecodeError`] variant when it is present but
    /// cannot be decoded.
    fn extension_value(&self, oid: &str) -> Result<String, DecodeError>;

    /// Returns `true` if an extension identified by `oid` is present,
    /// regardless of whether its value can be decoded.
    fn has_extension(&self, oid: &str) -> bool;

    /// Returns the certificate policy identifiers (dotted-decimal) carried by
    /// the certificate.
    fn policy_oids(&self) -> Result<Vec<String>, DecodeError>;

    /// Returns `true` if the certificate carries the certificate-type OID
    /// `oid`, either as a certificate policy or as an extension.
    fn carries_type_oid(&self, oid: &str) -> Result<bool, DecodeError> {
        if self.has_extension(oid) {
            return Ok(true);
        }

        Ok(self.policy_oids()?.iter().any(|policy| policy == oid))
    }
}

impl ExtensionSource for X509Certificate<'_> {
    fn extension_value(&self, oid: &str) -> Result<String, DecodeError> {
        let Some(extension) = self
            .extensions()
            .iter()
            .find(|extension| extension.oid.to_id_string() == oid)
        else {
            return Err(DecodeError::ExtensionNotFound {
                oid: oid.to_owned(),
            });
        };

        trace!(
            "decoding extension {oid} ({} bytes)",
            extension.value.len()
        );

        decode_string_value(oid, extension.value)
    }

    fn has_extension(&self, oid: &str) -> bool {
        self.extensions()
            .iter()
            .any(|extension| extension.oid.to_id_string() == oid)
    }

    fn policy_oids(&self) -> Result<Vec<String>, DecodeError> {
        let mut oids = vec![];

        for extension in self.extensions() {
            match extension.parsed_extension() {
                ParsedExtension::CertificatePolicies(policies) => {
                    oids.extend(
                        policies
                            .iter()
                            .map(|policy| policy.policy_id.to_id_string()),
                    );
                }

                _ if extension.oid == OID_X509_EXT_CERTIFICATE_POLICIES => {
                    return Err(DecodeError::MalformedExtension {
                        oid: OID_X509_EXT_CERTIFICATE_POLICIES.to_id_string(),
                        reason: "certificate policies could not be parsed".to_string(),
                    });
                }

                _ => (),
            }
        }

        Ok(oids)
    }
}

/// Decodes the contents of an extension's `extnValue` as a single DER
/// string.
///
/// The contents must be exactly one universal, primitive string value with
/// nothing following it.
pub(crate) fn decode_string_value(oid: &str, value: &[u8]) -> Result<String, DecodeError> {
    let (rem, any) = Any::from_der(value).map_err(|err| malformed(oid, err))?;

    if !rem.is_empty() {
        return Err(malformed(
            oid,
            format!("{} bytes of trailing data after value", rem.len()),
        ));
    }

    let tag = any.tag();
    if any.class() != Class::Universal || any.header.is_constructed() {
        return Err(DecodeError::UnsupportedValueType {
            oid: oid.to_owned(),
            tag: tag.0,
        });
    }

    let data = any.data;
    match tag {
        Tag::Utf8String => std::str::from_utf8(data)
            .map(str::to_owned)
            .map_err(|err| malformed(oid, err)),

        Tag::PrintableString | Tag::Ia5String | Tag::VisibleString | Tag::NumericString => {
            if !data.is_ascii() {
                return Err(malformed(oid, "non-ASCII character in ASCII string"));
            }
            Ok(data.iter().map(|b| char::from(*b)).collect())
        }

        // Decoded as ISO 8859-1.
        Tag::TeletexString => Ok(data.iter().map(|b| char::from(*b)).collect()),

        Tag::BmpString => {
            if data.len() % 2 != 0 {
                return Err(malformed(oid, "odd number of bytes in BMPString"));
            }

            let units = data
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));

            char::decode_utf16(units)
                .collect::<Result<String, _>>()
                .map_err(|err| malformed(oid, err))
        }

        _ => Err(DecodeError::UnsupportedValueType {
            oid: oid.to_owned(),
            tag: tag.0,
        }),
    }
}

fn malformed(oid: &str, reason: impl ToString) -> DecodeError {
    DecodeError::MalformedExtension {
        oid: oid.to_owned(),
        reason: reason.to_string(),
    }
}

/// Parses a DER-encoded X.509 certificate.
///
/// The returned certificate borrows from `der`.
pub fn parse_certificate_der(der: &[u8]) -> Result<X509Certificate<'_>, DecodeError> {
    let (_rem, certificate) = X509Certificate::from_der(der)
        .map_err(|err| DecodeError::InvalidCertificate(err.to_string()))?;

    Ok(certificate)
}

/// Returns the DER contents of the first PEM block in `pem`.
pub fn certificate_der_from_pem(pem: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let Some(block) = Pem::iter_from_buffer(pem).next() else {
        return Err(DecodeError::InvalidCertificate(
            "no PEM block found".to_string(),
        ));
    };

    let block = block.map_err(|err| DecodeError::InvalidCertificate(err.to_string()))?;
    Ok(block.contents)
}
