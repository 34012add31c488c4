use super::types::{InferenceRequest, InferenceResponse};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Path of the inference endpoint on the backend server.
pub const INFERENCE_ENDPOINT: &str = "/inference";

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn infer(&self, request: InferenceRequest) -> Result<InferenceResponse>;
}

pub struct HttpInferenceClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInferenceClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn infer(&self, request: InferenceRequest) -> Result<InferenceResponse> {
        let url = format!("{}{}", self.base_url, INFERENCE_ENDPOINT);

        debug!(
            "Calling inference endpoint at {} with {} messages",
            url,
            request.messages.len()
        );

        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(status.as_u16(), body));
        }

        let body = response.text().await?;
        let parsed: InferenceResponse = serde_json::from_str(&body)
            .map_err(|e| Error::internal(format!("Invalid inference server payload: {}", e)))?;

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = InferenceConfig {
            base_url: "http://localhost:8000/".to_string(),
            timeout_secs: 30,
        };
        let client = HttpInferenceClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
