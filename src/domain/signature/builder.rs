//! Canonical signature construction.
//!
//! Every gateway signature has the same shape:
//!
//! ```text
//! md5(field_1 # field_2 # ... # field_n # md5(secret))
//! ```
//!
//! The field order is part of the protocol. The secret itself is never sent;
//! only its digest enters the joined string.

use std::fmt;

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use super::digest::md5_hex;
use super::field::SignableField;

/// Separator joining all rendered fields and the secret digest.
pub const SEPARATOR: char = '#';

/// A computed request or notification signature (32 lowercase hex characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Compares against a claimed signature in constant time.
    pub fn matches(&self, claimed: &str) -> bool {
        constant_time_compare(self.0.as_bytes(), claimed.as_bytes())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Signature {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Signature {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<Signature> for String {
    fn from(signature: Signature) -> Self {
        signature.0
    }
}

/// Ordered list of rendered fields awaiting signing.
///
/// Optional fields are appended only when present; an absent field removes
/// the element instead of leaving an empty placeholder between separators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningFields {
    parts: Vec<String>,
}

impl SigningFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field in its canonical rendering.
    pub fn push<'a>(mut self, field: impl Into<SignableField<'a>>) -> Self {
        self.parts.push(field.into().render().into_owned());
        self
    }

    /// Appends `field` only when it is present and non-empty.
    pub fn push_optional(self, field: Option<&str>) -> Self {
        match field {
            Some(value) if !value.is_empty() => self.push(SignableField::Text(value)),
            _ => self,
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.parts
    }

    /// Signs the fields with `secret`. The secret digest is recomputed on every call.
    pub fn sign(&self, secret: &str) -> Signature {
        build_signature(&self.parts, &md5_hex(secret))
    }
}

/// Joins `fields` and `secret_digest` with [`SEPARATOR`] and digests the result.
pub fn build_signature<S: AsRef<str>>(fields: &[S], secret_digest: &str) -> Signature {
    let capacity = fields.iter().map(|f| f.as_ref().len() + 1).sum::<usize>() + secret_digest.len();
    let mut joined = String::with_capacity(capacity);
    for field in fields {
        joined.push_str(field.as_ref());
        joined.push(SEPARATOR);
    }
    joined.push_str(secret_digest);
    Signature(md5_hex(&joined))
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
