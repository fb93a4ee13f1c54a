//! Payment registration requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::form_data::{flatten_add_info, flatten_purchase, FormData};
use crate::domain::foundation::{Currency, DiscountType, ProductUnit};
use crate::domain::signature::{PaymentSignParams, Signature};

/// Discount applied to a receipt line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDiscount {
    #[serde(rename = "type")]
    pub discount_type: DiscountType,
    pub value: f64,
}

/// Receipt line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseProduct {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
    pub vat: f64,
    pub unit: ProductUnit,
    pub discount: Option<ProductDiscount>,
}

/// Fiscal receipt attached to a payment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Purchase {
    pub products: Vec<PurchaseProduct>,
}

/// Request to register a payment and obtain a payment page redirect.
///
/// Times use the gateway format `"HH:mm:SS dd.MM.yyyy"`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub order_id: String,
    pub agent_name: String,
    pub user_name: Option<String>,
    /// Formatted with two decimals when signed and sent.
    pub amount: f64,
    pub goods: String,
    pub currency: Option<Currency>,
    pub email: String,
    pub phone: String,
    /// Payment method code, see [`PaymentPreference`](crate::domain::foundation::PaymentPreference).
    pub preference: Option<u32>,
    pub agent_time: String,
    pub limit_time: Option<String>,
    pub success_url: Option<String>,
    pub fail_url: Option<String>,
    pub shop_url: Option<String>,
    pub add_info: Option<BTreeMap<u32, String>>,
    pub client_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub token: Option<String>,
    pub purchase: Option<Purchase>,
    pub nspk_url: Option<String>,
}

impl CreatePaymentRequest {
    /// Signing record for this request. `amount` must be the string that is also sent.
    pub fn signing_params<'a>(&'a self, agent_id: u32, amount: &'a str) -> PaymentSignParams<'a> {
        PaymentSignParams {
            agent_id,
            order_id: &self.order_id,
            agent_time: &self.agent_time,
            amount,
            phone: &self.phone,
            token: self.token.as_deref(),
        }
    }

    /// Transport payload for `/api/shop`.
    pub fn to_form(&self, agent_id: u32, amount: &str, sign: &Signature) -> FormData {
        let mut form = FormData::new();
        form.insert("agentId", agent_id.to_string());
        form.insert("orderId", self.order_id.as_str());
        form.insert("agentName", self.agent_name.as_str());
        form.insert("amount", amount);
        form.insert("goods", self.goods.as_str());
        form.insert("email", self.email.as_str());
        form.insert("phone", self.phone.as_str());
        form.insert("agentTime", self.agent_time.as_str());
        form.insert("sign", sign.as_str());

        form.insert_opt("userName", self.user_name.as_deref());
        if let Some(currency) = self.currency {
            form.insert("currency", currency.as_str());
        }
        if let Some(preference) = self.preference {
            form.insert("preference", preference.to_string());
        }
        form.insert_opt("limitTime", self.limit_time.as_deref());
        form.insert_opt("successUrl", self.success_url.as_deref());
        form.insert_opt("failUrl", self.fail_url.as_deref());
        form.insert_opt("shop_url", self.shop_url.as_deref());
        form.insert_opt("clientId", self.client_id.as_deref());
        form.insert_opt("firstName", self.first_name.as_deref());
        form.insert_opt("lastName", self.last_name.as_deref());
        form.insert_opt("addressLine1", self.address_line1.as_deref());
        form.insert_opt("addressLine2", self.address_line2.as_deref());
        form.insert_opt("city", self.city.as_deref());
        form.insert_opt("state", self.state.as_deref());
        form.insert_opt("country", self.country.as_deref());
        form.insert_opt("token", self.token.as_deref());
        form.insert_opt("nspkUrl", self.nspk_url.as_deref());

        if let Some(add_info) = &self.add_info {
            form.extend(flatten_add_info(add_info));
        }
        if let Some(purchase) = &self.purchase {
            form.extend(flatten_purchase(purchase));
        }

        form
    }
}

/// Result of a payment registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentResponse {
    /// Payment page the customer's browser should be sent to.
    pub redirect_url: String,
}
