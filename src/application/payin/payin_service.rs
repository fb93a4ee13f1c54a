//! PayinService - Signed operations against the gateway.
//!
//! Each operation formats amounts, signs the request with the matching
//! variant, encodes the form and hands it to the transport. The service
//! interprets the transport's raw answer; transports never do.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use crate::config::{AppConfig, ConfigError, PayinConfig};
use crate::domain::foundation::PayinError;
use crate::domain::requests::{
    terminal_invoice_form, CreateP2PInvoiceRequest, CreatePaymentRequest, CreatePaymentResponse,
    CreateTerminalInvoiceRequest, CreateTerminalInvoiceResponse, CreateTokenV1Request,
    CreateTokenV1Response, CreateTokenV2Request, CreateTokenV2Response, FormData,
    GetPaymentMethodsRequest, P2PInvoiceErrorResponse, P2PInvoiceResponse, PaymentMethod,
    TokenV1PaymentRequest, TokenV1PaymentResponse, TokenV2StatusRequest, TokenV2StatusResponse,
};
use crate::domain::signature::{format_amount, Signable};
use crate::ports::{GatewayTransport, TransportResponse};

const SHOP_PATH: &str = "/api/shop";
const PROVIDERS_PATH: &str = "/shop/get-providers-pay";
const TOKEN_V1_CREATE_PATH: &str = "/api/rpay/token";
const TOKEN_V1_PAY_PATH: &str = "/api/rpay/pay";
const TOKEN_V2_CREATE_PATH: &str = "/api/rpay/get-token";
const TOKEN_V2_STATUS_PATH: &str = "/api/rpay/get-status-token";

/// Client for the gateway's merchant API.
pub struct PayinService {
    config: PayinConfig,
    transport: Arc<dyn GatewayTransport>,
}

impl PayinService {
    pub fn new(config: PayinConfig, transport: Arc<dyn GatewayTransport>) -> Self {
        Self { config, transport }
    }

    /// Loads and validates configuration from the environment.
    pub fn from_env(transport: Arc<dyn GatewayTransport>) -> Result<Self, PayinError> {
        let config = AppConfig::load()?;
        config.validate().map_err(ConfigError::from)?;
        Ok(Self::new(config.gateway, transport))
    }

    pub fn config(&self) -> &PayinConfig {
        &self.config
    }

    fn secret(&self) -> &str {
        self.config.secret.expose_secret()
    }

    /// Registers a payment and returns the payment page URL.
    ///
    /// # Errors
    ///
    /// Returns `PayinError::Api` if the gateway does not answer with a redirect.
    pub async fn create_payment(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<CreatePaymentResponse, PayinError> {
        let amount = format_amount(request.amount);
        let sign = request
            .signing_params(self.config.agent_id, &amount)
            .sign(self.secret());
        let form = request.to_form(self.config.agent_id, &amount, &sign);

        tracing::debug!(order_id = %request.order_id, path = SHOP_PATH, "Registering payment");
        let response = self.post(SHOP_PATH, &form, true).await?;

        let redirect_url = response.redirect_url.ok_or_else(|| {
            tracing::error!(
                order_id = %request.order_id,
                status = response.status,
                "Gateway did not redirect to a payment page"
            );
            PayinError::api(
                "Gateway did not return a payment redirect",
                response.status,
                response.body.as_ref().map(|b| b.to_string()),
            )
        })?;

        Ok(CreatePaymentResponse { redirect_url })
    }

    /// Lists the payment methods enabled for the merchant.
    pub async fn get_payment_methods(
        &self,
        request: &GetPaymentMethodsRequest,
    ) -> Result<Vec<PaymentMethod>, PayinError> {
        let sign = request
            .signing_params(self.config.agent_id)
            .sign(self.secret());
        let form = request.to_form(self.config.agent_id, &sign);

        tracing::debug!(path = PROVIDERS_PATH, "Fetching payment methods");
        self.post_json(PROVIDERS_PATH, &form).await
    }

    /// Creates a v1 token from a completed payment.
    pub async fn create_token_v1(
        &self,
        request: &CreateTokenV1Request,
    ) -> Result<CreateTokenV1Response, PayinError> {
        let sign = request
            .signing_params(self.config.agent_id)
            .sign(self.secret());
        let form = request.to_form(self.config.agent_id, &sign);

        tracing::debug!(order_id = %request.order_id, path = TOKEN_V1_CREATE_PATH, "Creating v1 token");
        self.post_json(TOKEN_V1_CREATE_PATH, &form).await
    }

    /// Charges a v1 token.
    pub async fn pay_with_token_v1(
        &self,
        request: &TokenV1PaymentRequest,
    ) -> Result<TokenV1PaymentResponse, PayinError> {
        let amount = format_amount(request.amount);
        let sign = request
            .signing_params(self.config.agent_id, &amount)
            .sign(self.secret());
        let form = request.to_form(self.config.agent_id, &amount, &sign);

        tracing::debug!(order_id = %request.order_id, path = TOKEN_V1_PAY_PATH, "Charging v1 token");
        self.post_json(TOKEN_V1_PAY_PATH, &form).await
    }

    /// Starts v2 token confirmation; the response carries the confirmation URL.
    pub async fn create_token_v2(
        &self,
        request: &CreateTokenV2Request,
    ) -> Result<CreateTokenV2Response, PayinError> {
        let sign = request
            .signing_params(self.config.agent_id)
            .sign(self.secret());
        let form = request.to_form(self.config.agent_id, &sign);

        tracing::debug!(
            preference = request.preference,
            path = TOKEN_V2_CREATE_PATH,
            "Creating v2 token"
        );
        self.post_json(TOKEN_V2_CREATE_PATH, &form).await
    }

    pub async fn get_token_v2_status(
        &self,
        request: &TokenV2StatusRequest,
    ) -> Result<TokenV2StatusResponse, PayinError> {
        let sign = request
            .signing_params(self.config.agent_id)
            .sign(self.secret());
        let form = request.to_form(self.config.agent_id, &sign);

        tracing::debug!(path = TOKEN_V2_STATUS_PATH, "Checking v2 token status");
        self.post_json(TOKEN_V2_STATUS_PATH, &form).await
    }

    /// Registers an invoice payable at a terminal.
    pub async fn create_terminal_invoice(
        &self,
        request: &CreateTerminalInvoiceRequest,
    ) -> Result<CreateTerminalInvoiceResponse, PayinError> {
        let amount = format_amount(request.amount);
        let sign = request
            .signing_params(self.config.agent_id, &amount)
            .sign(self.secret());
        let form = terminal_invoice_form(request, self.config.agent_id, &amount, &sign);

        tracing::debug!(order_id = %request.order_id, path = SHOP_PATH, "Creating terminal invoice");
        self.post_json(SHOP_PATH, &form).await
    }

    /// Registers a card-to-card or SBP transfer invoice.
    ///
    /// # Errors
    ///
    /// Returns `PayinError::Api` carrying the gateway's `user_msg` when the
    /// gateway refuses the invoice with `status: false`.
    pub async fn create_p2p_invoice(
        &self,
        request: &CreateP2PInvoiceRequest,
    ) -> Result<P2PInvoiceResponse, PayinError> {
        let amount = format_amount(request.payment.amount);
        let sign = request
            .signing_params(self.config.agent_id, &amount)
            .sign(self.secret());
        let form = request.to_form(self.config.agent_id, &amount, &sign);

        tracing::debug!(
            order_id = %request.payment.order_id,
            p2p_type = request.p2p_type.as_str(),
            path = SHOP_PATH,
            "Creating P2P invoice"
        );
        let response = self.post(SHOP_PATH, &form, false).await?;

        let refused = response
            .body
            .as_ref()
            .and_then(|body| body.get("status"))
            .and_then(serde_json::Value::as_bool)
            == Some(false);
        if refused {
            let refusal: P2PInvoiceErrorResponse = response.json()?;
            tracing::error!(
                order_id = %request.payment.order_id,
                message = %refusal.user_msg,
                "Gateway refused P2P invoice"
            );
            return Err(PayinError::api(
                refusal.user_msg,
                response.status,
                response.body.as_ref().map(|b| b.to_string()),
            ));
        }

        response.json()
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Transport helpers
    // ════════════════════════════════════════════════════════════════════════════

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &FormData,
    ) -> Result<T, PayinError> {
        self.post(path, form, false).await?.json()
    }

    /// Sends the form and turns error statuses into `PayinError::Api`.
    ///
    /// A 3xx answer is accepted only when a redirect is expected.
    async fn post(
        &self,
        path: &str,
        form: &FormData,
        expect_redirect: bool,
    ) -> Result<TransportResponse, PayinError> {
        let response = self.transport.post_form(path, form, expect_redirect).await?;

        let redirected = expect_redirect && (300..400).contains(&response.status);
        if !redirected && !(200..300).contains(&response.status) {
            let body = response.body.as_ref().map(|b| b.to_string());
            tracing::error!(path = path, status = response.status, "Gateway returned error status");
            return Err(PayinError::api(
                format!(
                    "HTTP {}: {}",
                    response.status,
                    body.as_deref().unwrap_or_default()
                ),
                response.status,
                body,
            ));
        }

        Ok(response)
    }
}
