//! Inbound payment notification.
//!
//! The gateway posts a flat form to the merchant's result URL. Parsing turns
//! that untrusted map into a typed record; it is a separate stage from
//! signature verification so the signing core never sees malformed input.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;
use serde::Serialize;

use super::webhook_errors::WebhookError;
use crate::domain::foundation::{parse_agent_time, PaymentStatus};
use crate::domain::requests::parse_add_info;
use crate::domain::signature::NotificationSignParams;

/// A payment status notification delivered by the gateway.
///
/// Constructed once per delivery and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    pub agent_id: u32,
    pub order_id: String,
    pub payment_id: u64,
    pub amount: f64,
    pub currency: Option<String>,
    pub phone: String,
    pub preference: u32,
    pub payment_status: PaymentStatus,
    /// Format: `"HH:mm:SS dd.MM.yyyy"`.
    pub payment_date: String,
    pub goods: String,
    pub agent_name: String,
    /// Signature claimed by the sender.
    pub sign: String,
    pub comment: Option<String>,
    pub add_info: Option<BTreeMap<u32, String>>,
}

impl PaymentNotification {
    /// Parses a raw form delivery.
    ///
    /// # Errors
    ///
    /// Returns `WebhookError::MalformedField` naming the first field that is
    /// missing or cannot be parsed.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, WebhookError> {
        let status_code: u8 = parse_number(form, "paymentStatus")?;
        let payment_status = PaymentStatus::from_code(status_code)
            .ok_or(WebhookError::MalformedField("paymentStatus"))?;

        let amount: f64 = parse_number(form, "amount")?;
        if !amount.is_finite() {
            return Err(WebhookError::MalformedField("amount"));
        }

        // Unsigned; an unreadable value never rejects a delivery.
        let preference = optional(form, "preference")
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0);

        Ok(PaymentNotification {
            agent_id: parse_number(form, "agentId")?,
            order_id: required(form, "orderId")?.to_string(),
            payment_id: parse_number(form, "paymentId")?,
            amount,
            currency: optional(form, "currency").map(str::to_string),
            phone: required(form, "phone")?.to_string(),
            preference,
            payment_status,
            payment_date: required(form, "paymentDate")?.to_string(),
            goods: optional(form, "goods").unwrap_or_default().to_string(),
            agent_name: optional(form, "agentName").unwrap_or_default().to_string(),
            sign: required(form, "sign")?.to_string(),
            comment: optional(form, "comment").map(decode_comment),
            add_info: parse_add_info(form),
        })
    }

    /// Signing record over this notification's own fields.
    pub fn signing_params(&self) -> NotificationSignParams<'_> {
        NotificationSignParams {
            agent_id: self.agent_id,
            order_id: &self.order_id,
            payment_id: self.payment_id,
            amount: self.amount,
            phone: &self.phone,
            payment_status: self.payment_status,
            payment_date: &self.payment_date,
        }
    }

    pub fn is_successful(&self) -> bool {
        self.payment_status.is_success()
    }

    /// `paymentDate` as a timestamp, if it is in the gateway format.
    pub fn payment_datetime(&self) -> Option<NaiveDateTime> {
        parse_agent_time(&self.payment_date)
    }
}

fn required<'a>(form: &'a HashMap<String, String>, key: &'static str) -> Result<&'a str, WebhookError> {
    form.get(key)
        .map(String::as_str)
        .ok_or(WebhookError::MalformedField(key))
}

fn optional<'a>(form: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    form.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(
    form: &HashMap<String, String>,
    key: &'static str,
) -> Result<T, WebhookError> {
    required(form, key)?
        .trim()
        .parse()
        .map_err(|_| WebhookError::MalformedField(key))
}

/// Comments arrive percent-encoded; undecodable input is kept verbatim.
fn decode_comment(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
