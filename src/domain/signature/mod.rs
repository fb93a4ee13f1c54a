//! Request and notification signing.
//!
//! # Module Structure
//!
//! - `digest` - MD5 primitive (gateway-mandated, see module docs)
//! - `field` - Canonical rendering of signed fields
//! - `builder` - `#`-joined signature construction
//! - `variants` - The six signing recipes

mod builder;
mod digest;
mod field;
mod variants;

pub use builder::{build_signature, Signature, SigningFields, SEPARATOR};
pub use digest::{md5_hex, DIGEST_HEX_LEN};
pub use field::{format_amount, render_decimal, SignableField};
pub use variants::{
    sign_get_providers, sign_notification, sign_payment, sign_token_v1_create,
    sign_token_v1_pay, sign_token_v2, NotificationSignParams, PaymentSignParams,
    ProviderLookupSignParams, Signable, TokenV1CreateSignParams, TokenV1PaySignParams,
    TokenV2SignParams,
};
