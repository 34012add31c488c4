use crate::{
    Error, Result,
    chat::ChatMessage,
    inference::{InferenceClient, InferenceRequest},
};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of a forwarded chat turn: the assistant reply and the full
/// updated history (input history + user message + assistant message).
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub response: String,
    pub conversation_history: Vec<ChatMessage>,
}

/// Stateless forwarding core. Holds nothing but the backend client;
/// every invocation is independent.
pub struct Relay {
    client: Arc<dyn InferenceClient>,
}

impl Relay {
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self { client }
    }

    pub async fn handle(&self, message: String, history: Vec<ChatMessage>) -> Result<ChatReply> {
        info!("Processing message of {} characters", message.len());

        let mut messages = history;
        messages.push(ChatMessage::user(message));

        let request = InferenceRequest::new(messages.clone());
        let response = self.client.infer(request).await?;

        let text = response
            .text()
            .ok_or(Error::EmptyUpstreamResponse)?
            .to_string();

        debug!("Inference server replied with {} characters", text.len());

        messages.push(ChatMessage::assistant(text.clone()));

        Ok(ChatReply {
            response: text,
            conversation_history: messages,
        })
    }
}
