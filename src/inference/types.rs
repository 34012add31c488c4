use crate::chat::ChatMessage;
use serde::{Deserialize, Serialize};

/// Default generation parameters sent with every request. Not currently
/// configurable per request.
pub const DEFAULT_MAX_TOKENS: u32 = 512;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TOP_P: f32 = 0.9;

/// Payload POSTed to the inference backend. Built fresh per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub messages: Vec<ChatMessage>,
    pub config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

/// Success payload from the inference backend. The `response` field is
/// part of the external contract but not guaranteed to be present.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceResponse {
    #[serde(default)]
    pub response: Option<String>,
}

impl InferenceRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            config: GenerationConfig::default(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
        }
    }
}

impl InferenceResponse {
    /// Returns the reply text, treating an absent or empty field the same.
    pub fn text(&self) -> Option<&str> {
        self.response.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_serializes_camel_case_config() {
        let request = InferenceRequest::new(vec![ChatMessage::user("hello")]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "messages": [{"role": "user", "content": "hello"}],
                "config": {"maxTokens": 512, "temperature": 0.7, "topP": 0.9}
            })
        );
    }

    #[test]
    fn response_text_present() {
        let response: InferenceResponse =
            serde_json::from_value(json!({"response": "hi there"})).unwrap();
        assert_eq!(response.text(), Some("hi there"));
    }

    #[test]
    fn response_text_missing_field() {
        let response: InferenceResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn response_text_empty_string() {
        let response: InferenceResponse =
            serde_json::from_value(json!({"response": ""})).unwrap();
        assert_eq!(response.text(), None);
    }
}
