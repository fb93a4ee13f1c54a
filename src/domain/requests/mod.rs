//! Typed gateway requests, responses and their form encoding.
//!
//! Each request exposes `signing_params` (the record its signature is
//! computed from) and `to_form` (the transport payload). Both render the
//! shared fields through the same canonical strings.

mod form_data;
mod invoice;
mod methods;
mod payment;
mod token;

pub use form_data::{flatten_add_info, flatten_purchase, parse_add_info, FormData};
pub use invoice::{
    terminal_invoice_form, CreateP2PInvoiceRequest, CreateTerminalInvoiceRequest,
    CreateTerminalInvoiceResponse, P2PInvoiceCardResponse, P2PInvoiceErrorResponse,
    P2PInvoiceResponse, P2PInvoiceSbpResponse, TerminalInvoiceResult,
};
pub use methods::{GetPaymentMethodsRequest, PaymentMethod};
pub use payment::{
    CreatePaymentRequest, CreatePaymentResponse, ProductDiscount, Purchase, PurchaseProduct,
};
pub use token::{
    CreateTokenV1Request, CreateTokenV1Response, CreateTokenV2Request, CreateTokenV2Response,
    CreateTokenV2Result, TokenV1PaymentRequest, TokenV1PaymentResponse, TokenV2StatusRequest,
    TokenV2StatusResponse, TokenV2StatusResult,
};
