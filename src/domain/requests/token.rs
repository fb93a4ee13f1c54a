//! Recurring payment tokens.
//!
//! - v1: a token is issued from a completed payment and charged without 3-D Secure.
//! - v2: the customer confirms the card on a gateway page (3-D Secure capable).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::form_data::{flatten_add_info, FormData};
use crate::domain::signature::{
    format_amount, Signature, TokenV1CreateSignParams, TokenV1PaySignParams, TokenV2SignParams,
};

/// Request to issue a v1 token from a successful payment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenV1Request {
    /// Order id of the successful payment.
    pub order_id: String,
    pub agent_time: String,
}

impl CreateTokenV1Request {
    pub fn signing_params(&self, agent_id: u32) -> TokenV1CreateSignParams<'_> {
        TokenV1CreateSignParams {
            agent_id,
            order_id: &self.order_id,
            agent_time: &self.agent_time,
        }
    }

    pub fn to_form(&self, agent_id: u32, sign: &Signature) -> FormData {
        let mut form = FormData::new();
        form.insert("agentId", agent_id.to_string());
        form.insert("orderId", self.order_id.as_str());
        form.insert("agentTime", self.agent_time.as_str());
        form.insert("sign", sign.as_str());
        form
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTokenV1Response {
    pub status: bool,
    /// Token on success, error message on failure.
    pub result: String,
}

/// Recurring charge using a v1 token.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenV1PaymentRequest {
    pub order_id: String,
    pub agent_name: String,
    pub user_name: Option<String>,
    pub amount: f64,
    pub goods: String,
    pub currency: Option<String>,
    pub email: String,
    pub phone: String,
    /// Payment method, 125 for plastic cards.
    pub preference: u32,
    pub agent_time: String,
    pub limit_time: Option<String>,
    pub success_url: Option<String>,
    pub fail_url: Option<String>,
    pub shop_url: Option<String>,
    pub add_info: Option<BTreeMap<u32, String>>,
    pub client_id: Option<String>,
    pub token: String,
}

impl TokenV1PaymentRequest {
    pub fn signing_params<'a>(&'a self, agent_id: u32, amount: &'a str) -> TokenV1PaySignParams<'a> {
        TokenV1PaySignParams {
            agent_id,
            order_id: &self.order_id,
            agent_time: &self.agent_time,
            amount,
            phone: &self.phone,
            token: &self.token,
        }
    }

    /// Transport payload for `/api/rpay/pay`.
    pub fn to_form(&self, agent_id: u32, amount: &str, sign: &Signature) -> FormData {
        let mut form = FormData::new();
        form.insert("agentId", agent_id.to_string());
        form.insert("orderId", self.order_id.as_str());
        form.insert("agentName", self.agent_name.as_str());
        form.insert("amount", amount);
        form.insert("goods", self.goods.as_str());
        form.insert("email", self.email.as_str());
        form.insert("phone", self.phone.as_str());
        form.insert("preference", self.preference.to_string());
        form.insert("agentTime", self.agent_time.as_str());
        form.insert("token", self.token.as_str());
        form.insert("sign", sign.as_str());

        form.insert_opt("userName", self.user_name.as_deref());
        form.insert_opt("currency", self.currency.as_deref());
        form.insert_opt("limitTime", self.limit_time.as_deref());
        form.insert_opt("successUrl", self.success_url.as_deref());
        form.insert_opt("failUrl", self.fail_url.as_deref());
        form.insert_opt("shop_url", self.shop_url.as_deref());
        form.insert_opt("clientId", self.client_id.as_deref());
        if let Some(add_info) = &self.add_info {
            form.extend(flatten_add_info(add_info));
        }

        form
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenV1PaymentResponse {
    pub status: bool,
    pub result: String,
    /// Present when 3-D Secure confirmation is required.
    pub url: Option<String>,
}

/// Request to start v2 token confirmation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenV2Request {
    /// Payment method (22, 125 or 133).
    pub preference: u32,
    pub success_url: String,
    pub cancel_url: String,
    pub callback_url: Option<String>,
    pub currency: Option<String>,
    /// Temporary verification charge.
    pub amount: Option<f64>,
    pub email: Option<String>,
}

impl CreateTokenV2Request {
    pub fn signing_params(&self, agent_id: u32) -> TokenV2SignParams {
        TokenV2SignParams {
            agent_id,
            preference: self.preference,
        }
    }

    /// Transport payload for `/api/rpay/get-token`.
    pub fn to_form(&self, agent_id: u32, sign: &Signature) -> FormData {
        let mut form = FormData::new();
        form.insert("agentId", agent_id.to_string());
        form.insert("preference", self.preference.to_string());
        form.insert("successUrl", self.success_url.as_str());
        form.insert("cancelUrl", self.cancel_url.as_str());
        form.insert("sign", sign.as_str());
        form.insert_opt("callbackUrl", self.callback_url.as_deref());
        form.insert_opt("currency", self.currency.as_deref());
        if let Some(amount) = self.amount {
            form.insert("amount", format_amount(amount));
        }
        form.insert_opt("email", self.email.as_deref());
        form
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTokenV2Result {
    pub token: String,
    pub client_redirect_url: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTokenV2Response {
    pub status: bool,
    pub result: CreateTokenV2Result,
}

/// Request to check whether a v2 token was confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenV2StatusRequest {
    pub preference: u32,
    pub token: String,
}

impl TokenV2StatusRequest {
    pub fn signing_params(&self, agent_id: u32) -> TokenV2SignParams {
        TokenV2SignParams {
            agent_id,
            preference: self.preference,
        }
    }

    pub fn to_form(&self, agent_id: u32, sign: &Signature) -> FormData {
        let mut form = FormData::new();
        form.insert("agentId", agent_id.to_string());
        form.insert("preference", self.preference.to_string());
        form.insert("token", self.token.as_str());
        form.insert("sign", sign.as_str());
        form
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenV2StatusResult {
    pub token: String,
    /// `"SUCCEEDED"` or `"not confirmed"`.
    pub status: String,
    pub error: Option<String>,
}

impl TokenV2StatusResult {
    pub fn is_confirmed(&self) -> bool {
        self.status == "SUCCEEDED"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenV2StatusResponse {
    pub status: bool,
    pub result: TokenV2StatusResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signature::Signable;

    #[test]
    fn token_v1_payment_form_always_carries_token_and_preference() {
        let req = TokenV1PaymentRequest {
            order_id: "2".to_string(),
            agent_name: "Store".to_string(),
            amount: 99.9,
            goods: "Subscription".to_string(),
            email: "a@b.c".to_string(),
            phone: "+7".to_string(),
            preference: 125,
            agent_time: "10:00:00 01.01.2024".to_string(),
            token: "tok_v1".to_string(),
            shop_url: Some("https://shop".to_string()),
            ..Default::default()
        };
        let amount = format_amount(req.amount);
        let sign = req.signing_params(8686, &amount).sign("s");

        let form = req.to_form(8686, &amount, &sign);

        assert_eq!(form.get("amount"), Some("99.90"));
        assert_eq!(form.get("preference"), Some("125"));
        assert_eq!(form.get("token"), Some("tok_v1"));
        assert_eq!(form.get("shop_url"), Some("https://shop"));
        assert!(!form.contains_key("limitTime"));
    }

    #[test]
    fn token_v2_form_formats_optional_amount() {
        let req = CreateTokenV2Request {
            preference: 22,
            success_url: "https://ok".to_string(),
            cancel_url: "https://cancel".to_string(),
            amount: Some(1.0),
            ..Default::default()
        };
        let sign = req.signing_params(8686).sign("s");

        let form = req.to_form(8686, &sign);

        assert_eq!(form.get("amount"), Some("1.00"));
        assert_eq!(form.get("preference"), Some("22"));
        assert!(!form.contains_key("callbackUrl"));
        assert!(!form.contains_key("email"));
    }

    #[test]
    fn token_v2_create_and_status_share_signature() {
        let create = CreateTokenV2Request {
            preference: 125,
            ..Default::default()
        };
        let status = TokenV2StatusRequest {
            preference: 125,
            token: "tok".to_string(),
        };
        assert_eq!(
            create.signing_params(8686).sign("s"),
            status.signing_params(8686).sign("s")
        );
    }

    #[test]
    fn token_v2_status_confirmation() {
        let json = r#"{"status":true,"result":{"token":"t","status":"SUCCEEDED"}}"#;
        let response: TokenV2StatusResponse = serde_json::from_str(json).unwrap();
        assert!(response.result.is_confirmed());
        assert!(response.result.error.is_none());
    }
}
