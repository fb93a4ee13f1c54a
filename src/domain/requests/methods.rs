//! Payment method lookup.

use serde::{Deserialize, Serialize};

use super::form_data::FormData;
use crate::domain::signature::{ProviderLookupSignParams, Signature};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPaymentMethodsRequest {
    /// Format: `"HH:mm:SS dd.MM.yyyy"`.
    pub agent_time: String,
}

impl GetPaymentMethodsRequest {
    pub fn signing_params(&self, agent_id: u32) -> ProviderLookupSignParams<'_> {
        ProviderLookupSignParams {
            agent_id,
            agent_time: &self.agent_time,
        }
    }

    pub fn to_form(&self, agent_id: u32, sign: &Signature) -> FormData {
        let mut form = FormData::new();
        form.insert("agentId", agent_id.to_string());
        form.insert("agentTime", self.agent_time.as_str());
        form.insert("sign", sign.as_str());
        form
    }
}

/// A payment method enabled for the merchant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub name: String,
    pub hg_id: i64,
    pub icon: String,
    pub big_icon: Option<String>,
    pub preference: u32,
    pub descr: Option<String>,
    pub special: i64,
    pub non_interactive: bool,
    pub disabled: bool,
    pub enabled: bool,
    pub enable: bool,
}

impl PaymentMethod {
    /// True when the method can currently be offered to customers.
    pub fn is_available(&self) -> bool {
        self.enabled && !self.disabled
    }
}
