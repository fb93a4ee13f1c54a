//! Canonical string rendering of signed fields.
//!
//! The string a field renders to here is used both in the signed sequence and
//! in the transport payload. If the two ever differ, the gateway's signature
//! check will never match.

use std::borrow::Cow;

/// A single value entering a signature computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignableField<'a> {
    /// Unsigned integer, rendered base-10 without separators.
    Integer(u64),
    /// Amount already formatted by the caller (outbound requests).
    Amount(&'a str),
    /// Numeric amount rendered in its shortest decimal form (notifications).
    Decimal(f64),
    /// Free text, passed through unchanged.
    Text(&'a str),
    /// `"HH:mm:SS dd.MM.yyyy"` timestamp, passed through unchanged and never parsed.
    DateTime(&'a str),
}

impl SignableField<'_> {
    /// Renders the field to its canonical string.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            SignableField::Integer(value) => Cow::Owned(value.to_string()),
            SignableField::Decimal(value) => Cow::Owned(render_decimal(*value)),
            SignableField::Amount(s) | SignableField::Text(s) | SignableField::DateTime(s) => {
                Cow::Borrowed(s)
            }
        }
    }
}

impl From<u8> for SignableField<'_> {
    fn from(value: u8) -> Self {
        SignableField::Integer(u64::from(value))
    }
}

impl From<u32> for SignableField<'_> {
    fn from(value: u32) -> Self {
        SignableField::Integer(u64::from(value))
    }
}

impl From<u64> for SignableField<'_> {
    fn from(value: u64) -> Self {
        SignableField::Integer(value)
    }
}

impl<'a> From<&'a str> for SignableField<'a> {
    fn from(value: &'a str) -> Self {
        SignableField::Text(value)
    }
}

/// Formats an outbound amount with exactly two decimal places (`150.5` -> `"150.50"`).
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Renders a number in its shortest decimal form (`166.7`, `100`, `0.18`).
///
/// Used for notification amounts and receipt line items. Negative zero
/// renders as `"0"`.
///
/// Matches the gateway's number rendering for `1e-6 <= |x| < 1e21`. Outside
/// that range the gateway switches to exponent notation (`1e-7`, `1e+21`)
/// while this keeps plain digits.
pub fn render_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
