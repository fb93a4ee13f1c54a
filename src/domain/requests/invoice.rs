//! Terminal and peer-to-peer invoices.
//!
//! Both are registered through `/api/shop` with the payment signature; the
//! gateway answers with JSON instead of a redirect.

use serde::{Deserialize, Serialize};

use super::form_data::FormData;
use super::payment::CreatePaymentRequest;
use crate::domain::foundation::P2PType;
use crate::domain::signature::{PaymentSignParams, Signature};

/// Terminal invoices take the same fields as a payment registration.
pub type CreateTerminalInvoiceRequest = CreatePaymentRequest;

/// Builds the terminal invoice payload (payment form plus `format=json`).
pub fn terminal_invoice_form(
    request: &CreateTerminalInvoiceRequest,
    agent_id: u32,
    amount: &str,
    sign: &Signature,
) -> FormData {
    let mut form = request.to_form(agent_id, amount, sign);
    form.insert("format", "json");
    form
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalInvoiceResult {
    pub number: String,
    pub payment_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTerminalInvoiceResponse {
    pub status: bool,
    pub result: TerminalInvoiceResult,
}

/// Card-to-card or SBP transfer invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateP2PInvoiceRequest {
    #[serde(flatten)]
    pub payment: CreatePaymentRequest,
    pub p2p_type: P2PType,
    pub sender_name: Option<String>,
}

impl CreateP2PInvoiceRequest {
    pub fn signing_params<'a>(&'a self, agent_id: u32, amount: &'a str) -> PaymentSignParams<'a> {
        self.payment.signing_params(agent_id, amount)
    }

    /// Payment form plus `json=1`, `p2p_type` and optional `sender_name`.
    pub fn to_form(&self, agent_id: u32, amount: &str, sign: &Signature) -> FormData {
        let mut form = self.payment.to_form(agent_id, amount, sign);
        form.insert("json", "1");
        form.insert("p2p_type", self.p2p_type.as_str());
        form.insert_opt("sender_name", self.sender_name.as_deref());
        form
    }
}

/// Transfer details returned for a P2P invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum P2PInvoiceResponse {
    Card(P2PInvoiceCardResponse),
    Sbp(P2PInvoiceSbpResponse),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct P2PInvoiceCardResponse {
    pub amount: f64,
    pub order_id: String,
    pub number: String,
    pub until: String,
    pub card_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct P2PInvoiceSbpResponse {
    pub amount: f64,
    pub order_id: String,
    pub number: String,
    pub until: String,
    pub receiver_name: String,
    pub receiver_bank: String,
    pub receiver_phone: String,
}

/// Body returned when the gateway refuses a P2P invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct P2PInvoiceErrorResponse {
    pub status: bool,
    pub user_msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signature::Signable;

    fn payment() -> CreatePaymentRequest {
        CreatePaymentRequest {
            order_id: "5".to_string(),
            agent_name: "Store".to_string(),
            amount: 500.0,
            goods: "Transfer".to_string(),
            email: "a@b.c".to_string(),
            phone: "+7".to_string(),
            agent_time: "10:00:00 01.01.2024".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn terminal_invoice_adds_json_format() {
        let req = payment();
        let sign = req.signing_params(1, "500.00").sign("s");
        let form = terminal_invoice_form(&req, 1, "500.00", &sign);
        assert_eq!(form.get("format"), Some("json"));
        assert_eq!(form.get("amount"), Some("500.00"));
    }

    #[test]
    fn p2p_invoice_adds_transfer_fields() {
        let req = CreateP2PInvoiceRequest {
            payment: payment(),
            p2p_type: P2PType::SbpTg,
            sender_name: Some("Ivan I.".to_string()),
        };
        let sign = req.signing_params(1, "500.00").sign("s");

        let form = req.to_form(1, "500.00", &sign);

        assert_eq!(form.get("json"), Some("1"));
        assert_eq!(form.get("p2p_type"), Some("SBP_TG"));
        assert_eq!(form.get("sender_name"), Some("Ivan I."));
    }

    #[test]
    fn p2p_signature_equals_payment_signature() {
        let req = CreateP2PInvoiceRequest {
            payment: payment(),
            p2p_type: P2PType::Any,
            sender_name: None,
        };
        assert_eq!(
            req.signing_params(1, "500.00").sign("s"),
            req.payment.signing_params(1, "500.00").sign("s")
        );
    }

    #[test]
    fn p2p_response_distinguishes_card_and_sbp() {
        let card = r#"{"amount":500,"orderId":"5","number":"N1","until":"12:00","cardNumber":"4111"}"#;
        let sbp = r#"{"amount":500,"orderId":"5","number":"N2","until":"12:00",
            "receiverName":"Ivan","receiverBank":"Bank","receiverPhone":"+7"}"#;

        assert!(matches!(
            serde_json::from_str::<P2PInvoiceResponse>(card).unwrap(),
            P2PInvoiceResponse::Card(_)
        ));
        assert!(matches!(
            serde_json::from_str::<P2PInvoiceResponse>(sbp).unwrap(),
            P2PInvoiceResponse::Sbp(_)
        ));
    }
}
