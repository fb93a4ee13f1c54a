//! The six signing recipes used by the gateway.
//!
//! | Variant | Ordered fields |
//! |---|---|
//! | Payment registration | agentId, orderId, agentTime, amount, phone, \[token\] |
//! | Notification | agentId, orderId, paymentId, amount, phone, paymentStatus, paymentDate |
//! | Provider lookup | agentId, agentTime |
//! | Token-v1 create | agentId, orderId, agentTime |
//! | Token-v1 pay | agentId, orderId, agentTime, amount, phone, token |
//! | Token-v2 (create & status) | agentId, preference |
//!
//! Outbound amounts arrive already formatted with two decimals (see
//! [`format_amount`](super::field::format_amount)). The notification variant
//! instead signs the numeric amount in its shortest decimal form. The two
//! paths are kept separate because the gateway formats them differently.

use super::builder::{Signature, SigningFields};
use super::field::SignableField;
use crate::domain::foundation::PaymentStatus;

/// A parameter record that knows its ordered signing fields.
pub trait Signable {
    /// The ordered fields, without the trailing secret digest.
    fn signing_fields(&self) -> SigningFields;

    /// Signs the record with the merchant secret.
    fn sign(&self, secret: &str) -> Signature {
        self.signing_fields().sign(secret)
    }
}

/// Payment registration (`/api/shop`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSignParams<'a> {
    pub agent_id: u32,
    pub order_id: &'a str,
    pub agent_time: &'a str,
    /// Two-decimal amount string, e.g. `"166.70"`.
    pub amount: &'a str,
    pub phone: &'a str,
    /// Included only when present and non-empty.
    pub token: Option<&'a str>,
}

impl Signable for PaymentSignParams<'_> {
    fn signing_fields(&self) -> SigningFields {
        SigningFields::new()
            .push(self.agent_id)
            .push(self.order_id)
            .push(SignableField::DateTime(self.agent_time))
            .push(SignableField::Amount(self.amount))
            .push(self.phone)
            .push_optional(self.token)
    }
}

/// Inbound payment notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotificationSignParams<'a> {
    pub agent_id: u32,
    pub order_id: &'a str,
    pub payment_id: u64,
    /// Signed in shortest decimal form (`166.7`, not `166.70`).
    pub amount: f64,
    pub phone: &'a str,
    pub payment_status: PaymentStatus,
    pub payment_date: &'a str,
}

impl Signable for NotificationSignParams<'_> {
    fn signing_fields(&self) -> SigningFields {
        SigningFields::new()
            .push(self.agent_id)
            .push(self.order_id)
            .push(self.payment_id)
            .push(SignableField::Decimal(self.amount))
            .push(self.phone)
            .push(self.payment_status.code())
            .push(SignableField::DateTime(self.payment_date))
    }
}

/// Payment method lookup (`/shop/get-providers-pay`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderLookupSignParams<'a> {
    pub agent_id: u32,
    pub agent_time: &'a str,
}

impl Signable for ProviderLookupSignParams<'_> {
    fn signing_fields(&self) -> SigningFields {
        SigningFields::new()
            .push(self.agent_id)
            .push(SignableField::DateTime(self.agent_time))
    }
}

/// Token creation from a completed payment (`/api/rpay/token`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenV1CreateSignParams<'a> {
    pub agent_id: u32,
    pub order_id: &'a str,
    pub agent_time: &'a str,
}

impl Signable for TokenV1CreateSignParams<'_> {
    fn signing_fields(&self) -> SigningFields {
        SigningFields::new()
            .push(self.agent_id)
            .push(self.order_id)
            .push(SignableField::DateTime(self.agent_time))
    }
}

/// Recurring payment with a v1 token (`/api/rpay/pay`). The token is always signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenV1PaySignParams<'a> {
    pub agent_id: u32,
    pub order_id: &'a str,
    pub agent_time: &'a str,
    pub amount: &'a str,
    pub phone: &'a str,
    pub token: &'a str,
}

impl Signable for TokenV1PaySignParams<'_> {
    fn signing_fields(&self) -> SigningFields {
        SigningFields::new()
            .push(self.agent_id)
            .push(self.order_id)
            .push(SignableField::DateTime(self.agent_time))
            .push(SignableField::Amount(self.amount))
            .push(self.phone)
            .push(self.token)
    }
}

/// v2 token creation and status (`/api/rpay/get-token`, `/api/rpay/get-status-token`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenV2SignParams {
    pub agent_id: u32,
    pub preference: u32,
}

impl Signable for TokenV2SignParams {
    fn signing_fields(&self) -> SigningFields {
        SigningFields::new().push(self.agent_id).push(self.preference)
    }
}

/// `md5(agentId#orderId#agentTime#amount#phone#[token#]md5(secret))`
pub fn sign_payment(params: &PaymentSignParams<'_>, secret: &str) -> Signature {
    params.sign(secret)
}

/// `md5(agentId#orderId#paymentId#amount#phone#paymentStatus#paymentDate#md5(secret))`
pub fn sign_notification(params: &NotificationSignParams<'_>, secret: &str) -> Signature {
    params.sign(secret)
}

/// `md5(agentId#agentTime#md5(secret))`
pub fn sign_get_providers(params: &ProviderLookupSignParams<'_>, secret: &str) -> Signature {
    params.sign(secret)
}

/// `md5(agentId#orderId#agentTime#md5(secret))`
pub fn sign_token_v1_create(params: &TokenV1CreateSignParams<'_>, secret: &str) -> Signature {
    params.sign(secret)
}

/// `md5(agentId#orderId#agentTime#amount#phone#token#md5(secret))`
pub fn sign_token_v1_pay(params: &TokenV1PaySignParams<'_>, secret: &str) -> Signature {
    params.sign(secret)
}

/// `md5(agentId#preference#md5(secret))`
pub fn sign_token_v2(params: &TokenV2SignParams, secret: &str) -> Signature {
    params.sign(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signature::digest::md5_hex;

    const SECRET: &str = "mysecret";

    fn payment(token: Option<&str>) -> PaymentSignParams<'_> {
        PaymentSignParams {
            agent_id: 8686,
            order_id: "87876",
            agent_time: "13:12:03 10.01.2010",
            amount: "166.70",
            phone: "+79090000001",
            token,
        }
    }

    fn expected(joined_fields: &str) -> String {
        md5_hex(&format!("{}#{}", joined_fields, md5_hex(SECRET)))
    }

    // ══════════════════════════════════════════════════════════════
    // Payment registration
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn payment_without_token() {
        let signature = sign_payment(&payment(None), SECRET);
        assert_eq!(
            signature,
            expected("8686#87876#13:12:03 10.01.2010#166.70#+79090000001").as_str()
        );
    }

    #[test]
    fn payment_with_token_appends_it_before_secret() {
        let signature = sign_payment(&payment(Some("sometoken123")), SECRET);
        assert_eq!(
            signature,
            expected("8686#87876#13:12:03 10.01.2010#166.70#+79090000001#sometoken123").as_str()
        );
    }

    #[test]
    fn payment_token_omission_is_not_an_empty_placeholder() {
        let without = sign_payment(&payment(None), SECRET);
        let empty = sign_payment(&payment(Some("")), SECRET);
        let placeholder = expected("8686#87876#13:12:03 10.01.2010#166.70#+79090000001#");

        assert_eq!(without, empty);
        assert_ne!(without, placeholder.as_str());
    }

    #[test]
    fn payment_with_token_differs_from_without() {
        assert_ne!(
            sign_payment(&payment(None), SECRET),
            sign_payment(&payment(Some("t")), SECRET)
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Notification
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn notification_signs_shortest_decimal_amount() {
        let params = NotificationSignParams {
            agent_id: 8686,
            order_id: "87876",
            payment_id: 12_345_678,
            amount: 166.7,
            phone: "+79090000001",
            payment_status: PaymentStatus::Success,
            payment_date: "14:30:00 10.01.2010",
        };

        assert_eq!(
            sign_notification(&params, SECRET),
            expected("8686#87876#12345678#166.7#+79090000001#1#14:30:00 10.01.2010").as_str()
        );
    }

    #[test]
    fn notification_whole_amount_has_no_decimals() {
        let params = NotificationSignParams {
            agent_id: 8686,
            order_id: "12345",
            payment_id: 99999,
            amount: 100.0,
            phone: "+79161234567",
            payment_status: PaymentStatus::Partial,
            payment_date: "14:30:00 01.01.2024",
        };

        assert_eq!(
            params.sign(SECRET),
            expected("8686#12345#99999#100#+79161234567#3#14:30:00 01.01.2024").as_str()
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Provider lookup and tokens
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn get_providers() {
        let params = ProviderLookupSignParams {
            agent_id: 8686,
            agent_time: "13:12:03 10.01.2010",
        };
        assert_eq!(
            sign_get_providers(&params, SECRET),
            expected("8686#13:12:03 10.01.2010").as_str()
        );
    }

    #[test]
    fn token_v1_create() {
        let params = TokenV1CreateSignParams {
            agent_id: 8686,
            order_id: "87876",
            agent_time: "13:12:03 10.01.2010",
        };
        assert_eq!(
            sign_token_v1_create(&params, SECRET),
            expected("8686#87876#13:12:03 10.01.2010").as_str()
        );
    }

    #[test]
    fn token_v1_pay_always_includes_token() {
        let params = TokenV1PaySignParams {
            agent_id: 8686,
            order_id: "87876",
            agent_time: "13:12:03 10.01.2010",
            amount: "166.70",
            phone: "+79090000001",
            token: "tok_abc",
        };
        assert_eq!(
            sign_token_v1_pay(&params, SECRET),
            expected("8686#87876#13:12:03 10.01.2010#166.70#+79090000001#tok_abc").as_str()
        );
    }

    #[test]
    fn token_v1_pay_matches_payment_with_same_token() {
        let pay = TokenV1PaySignParams {
            agent_id: 8686,
            order_id: "87876",
            agent_time: "13:12:03 10.01.2010",
            amount: "166.70",
            phone: "+79090000001",
            token: "tok_abc",
        };
        assert_eq!(pay.sign(SECRET), payment(Some("tok_abc")).sign(SECRET));
    }

    #[test]
    fn token_v2() {
        let params = TokenV2SignParams {
            agent_id: 8686,
            preference: 125,
        };
        assert_eq!(sign_token_v2(&params, SECRET), expected("8686#125").as_str());
    }

    #[test]
    fn signing_is_idempotent() {
        let params = payment(Some("t"));
        assert_eq!(params.sign(SECRET), params.sign(SECRET));
    }

    #[test]
    fn different_secret_changes_signature() {
        let params = TokenV2SignParams {
            agent_id: 1,
            preference: 22,
        };
        assert_ne!(params.sign("a"), params.sign("b"));
    }
}
