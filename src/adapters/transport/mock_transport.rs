//! Mock gateway transport for testing.
//!
//! Provides a scripted implementation of `GatewayTransport` for unit and
//! integration tests. Supports:
//! - Queued responses, answered in order
//! - Error injection
//! - Call tracking with the exact form that was posted

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::foundation::PayinError;
use crate::domain::requests::FormData;
use crate::ports::{GatewayTransport, TransportResponse};

/// Mock transport for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockTransport::new();
/// mock.push_response(TransportResponse::redirect("https://pay.example/1"));
///
/// let service = PayinService::new(config, Arc::new(mock.clone()));
/// service.create_payment(&request).await?;
///
/// assert_eq!(mock.calls()[0].path, "/api/shop");
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Answers returned in FIFO order.
    responses: VecDeque<Result<TransportResponse, PayinError>>,

    /// Track calls for assertions.
    call_log: Vec<RecordedPost>,
}

/// Recorded form post for assertions.
#[derive(Debug, Clone)]
pub struct RecordedPost {
    pub path: String,
    pub form: FormData,
    pub expect_redirect: bool,
}

impl RecordedPost {
    /// Value of a posted form field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.form.get(key)
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock that answers every call with `response` once.
    pub fn responding(response: TransportResponse) -> Self {
        let mock = Self::new();
        mock.push_response(response);
        mock
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Methods
    // ════════════════════════════════════════════════════════════════════════════

    /// Queue a response for the next unanswered call.
    pub fn push_response(&self, response: TransportResponse) {
        self.inner.lock().unwrap().responses.push_back(Ok(response));
    }

    /// Queue a JSON body with status 200.
    pub fn push_json(&self, body: serde_json::Value) {
        self.push_response(TransportResponse::json_body(body));
    }

    /// Queue an error for the next unanswered call.
    pub fn push_error(&self, error: PayinError) {
        self.inner.lock().unwrap().responses.push_back(Err(error));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Call Tracking
    // ════════════════════════════════════════════════════════════════════════════

    /// All recorded posts.
    pub fn calls(&self) -> Vec<RecordedPost> {
        self.inner.lock().unwrap().call_log.clone()
    }

    /// Most recent post, if any.
    pub fn last_call(&self) -> Option<RecordedPost> {
        self.inner.lock().unwrap().call_log.last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().call_log.len()
    }

    /// Clear recorded calls.
    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().call_log.clear();
    }
}

#[async_trait]
impl GatewayTransport for MockTransport {
    async fn post_form(
        &self,
        path: &str,
        form: &FormData,
        expect_redirect: bool,
    ) -> Result<TransportResponse, PayinError> {
        let mut state = self.inner.lock().unwrap();
        state.call_log.push(RecordedPost {
            path: path.to_string(),
            form: form.clone(),
            expect_redirect,
        });

        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(PayinError::network(format!("no scripted response for {}", path))))
    }
}
