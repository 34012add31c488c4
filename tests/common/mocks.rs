use async_trait::async_trait;
use chat_relay::{
    Error, Result,
    inference::{InferenceClient, InferenceRequest, InferenceResponse},
};
use std::sync::{Arc, Mutex};

/// Mock inference backend for testing. Replays queued responses and
/// records every request it receives.
pub struct MockInferenceClient {
    pub responses: Arc<Mutex<Vec<InferenceResponse>>>,
    pub requests: Arc<Mutex<Vec<InferenceRequest>>>,
    pub failure: Mutex<Option<Error>>,
}

impl MockInferenceClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            failure: Mutex::new(None),
        }
    }

    pub fn with_response(self, text: &str) -> Self {
        self.responses.lock().unwrap().push(InferenceResponse {
            response: Some(text.to_string()),
        });
        self
    }

    pub fn with_raw_response(self, response: InferenceResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_failure(self, error: Error) -> Self {
        *self.failure.lock().unwrap() = Some(error);
        self
    }

    pub fn recorded_requests(&self) -> Vec<InferenceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn infer(&self, request: InferenceRequest) -> Result<InferenceResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(error) = self.failure.lock().unwrap().take() {
            return Err(error);
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockInferenceClient {
    fn default() -> Self {
        Self::new()
    }
}
