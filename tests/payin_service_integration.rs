//! Integration tests for `PayinService` through the public transport port.
//!
//! A test transport encodes each form exactly as it would travel on the wire
//! (`application/x-www-form-urlencoded`) and answers from a scripted router,
//! so these tests pin both the request bytes and the response handling.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use payin_sdk::application::PayinService;
use payin_sdk::config::PayinConfig;
use payin_sdk::domain::foundation::{Currency, DiscountType, PayinError, ProductUnit};
use payin_sdk::domain::requests::{
    CreatePaymentRequest, FormData, ProductDiscount, Purchase, PurchaseProduct,
};
use payin_sdk::ports::{GatewayTransport, TransportResponse};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Transport that records URL-encoded bodies and routes by path.
struct WireTransport {
    routes: HashMap<&'static str, TransportResponse>,
    bodies: Mutex<Vec<(String, String)>>,
}

impl WireTransport {
    fn new(routes: impl IntoIterator<Item = (&'static str, TransportResponse)>) -> Self {
        Self {
            routes: routes.into_iter().collect(),
            bodies: Mutex::new(Vec::new()),
        }
    }

    fn last_body(&self) -> String {
        self.bodies
            .lock()
            .unwrap()
            .last()
            .map(|(_, body)| body.clone())
            .unwrap_or_default()
    }
}

fn encode(form: &FormData) -> String {
    form.iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[async_trait]
impl GatewayTransport for WireTransport {
    async fn post_form(
        &self,
        path: &str,
        form: &FormData,
        _expect_redirect: bool,
    ) -> Result<TransportResponse, PayinError> {
        self.bodies
            .lock()
            .unwrap()
            .push((path.to_string(), encode(form)));
        self.routes
            .get(path)
            .cloned()
            .ok_or_else(|| PayinError::network(format!("no route for {}", path)))
    }
}

fn order() -> CreatePaymentRequest {
    CreatePaymentRequest {
        order_id: "ORD-1".to_string(),
        agent_name: "Coffee & Co".to_string(),
        amount: 450.0,
        goods: "Beans".to_string(),
        currency: Some(Currency::Rur),
        email: "buyer@example.com".to_string(),
        phone: "+79090000001".to_string(),
        agent_time: "08:00:00 05.05.2024".to_string(),
        shop_url: Some("https://shop.example/".to_string()),
        add_info: Some(BTreeMap::from([(1, "promo".to_string())])),
        purchase: Some(Purchase {
            products: vec![PurchaseProduct {
                name: "Arabica 1kg".to_string(),
                price: 450.0,
                quantity: 1.0,
                vat: 20.0,
                unit: ProductUnit::Piece,
                discount: Some(ProductDiscount {
                    discount_type: DiscountType::Percent,
                    value: 10.0,
                }),
            }],
        }),
        ..Default::default()
    }
}

// =============================================================================
// Wire format
// =============================================================================

#[tokio::test]
async fn payment_form_is_url_encoded_in_order() {
    let transport = Arc::new(WireTransport::new([(
        "/api/shop",
        TransportResponse::redirect("https://lk.payin-payout.net/pay/1"),
    )]));
    let service = PayinService::new(PayinConfig::new(8686, "mysecret"), transport.clone());

    let response = service.create_payment(&order()).await.unwrap();
    assert_eq!(response.redirect_url, "https://lk.payin-payout.net/pay/1");

    let body = transport.last_body();
    assert!(body.starts_with("agentId=8686&orderId=ORD-1&agentName=Coffee%20%26%20Co&amount=450.00"));
    assert!(body.contains("&currency=RUR"));
    assert!(body.contains("&shop_url=https%3A%2F%2Fshop.example%2F"));
    assert!(body.contains("&addInfo_1=promo"));
    assert!(body.contains("&purchase%5Bproducts%5D%5B0%5D%5Bname%5D=Arabica%201kg"));
    assert!(body.contains("&purchase%5Bproducts%5D%5B0%5D%5Bdiscount%5D%5Btype%5D=percent"));
}

#[tokio::test]
async fn sandbox_config_does_not_change_signature() {
    let routes = [("/api/shop", TransportResponse::redirect("https://pay"))];
    let production = Arc::new(WireTransport::new(routes.clone()));
    let sandbox = Arc::new(WireTransport::new(routes));

    PayinService::new(PayinConfig::new(8686, "mysecret"), production.clone())
        .create_payment(&order())
        .await
        .unwrap();
    PayinService::new(
        PayinConfig::new(8686, "mysecret").with_sandbox(true),
        sandbox.clone(),
    )
    .create_payment(&order())
    .await
    .unwrap();

    assert_eq!(production.last_body(), sandbox.last_body());
}

// =============================================================================
// Response handling
// =============================================================================

#[tokio::test]
async fn unknown_route_surfaces_network_error() {
    let transport = Arc::new(WireTransport::new(Vec::<(&str, TransportResponse)>::new()));
    let service = PayinService::new(PayinConfig::new(8686, "mysecret"), transport);

    let err = service.create_payment(&order()).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(err.http_status(), None);
}

#[tokio::test]
async fn client_error_is_not_retryable() {
    let transport = Arc::new(WireTransport::new([(
        "/api/shop",
        TransportResponse {
            status: 400,
            body: Some(json!({ "error": "bad sign" })),
            redirect_url: None,
        },
    )]));
    let service = PayinService::new(PayinConfig::new(8686, "mysecret"), transport);

    let err = service.create_terminal_invoice(&order()).await.unwrap_err();
    assert_eq!(err.http_status(), Some(400));
    assert!(!err.is_retryable());
    assert!(err.to_string().contains("bad sign"));
}
