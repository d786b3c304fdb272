//! Chat bridge: forwards questions to Gemini and spots shape requests.

pub mod client;
pub mod keywords;

pub use client::{ChatError, GeminiClient, GeminiConfig};
pub use keywords::{augment_query, detect_shape};

use shared::ShapeKind;

/// A question ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// What the user typed (trimmed)
    pub input: String,
    /// Text actually sent to the model
    pub prompt: String,
    /// Shape to create once the model has answered
    pub shape: Option<ShapeKind>,
}

impl ChatRequest {
    pub fn prepare(input: &str) -> Result<Self, ChatError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ChatError::EmptyQuery);
        }
        let shape = detect_shape(input);
        let prompt = match shape {
            Some(kind) => augment_query(input, kind),
            None => input.to_string(),
        };
        Ok(Self {
            input: input.to_string(),
            prompt,
            shape,
        })
    }
}

/// Outcome of one request, delivered back to the UI thread
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub request: ChatRequest,
    pub answer: Result<String, ChatError>,
}

/// Send `request` and wait for the answer.
pub async fn ask(client: &GeminiClient, request: ChatRequest) -> ChatReply {
    let answer = client.generate(&request.prompt).await;
    if let Err(e) = &answer {
        tracing::warn!("Chat request failed: {e}");
    }
    ChatReply { request, answer }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_question_is_sent_verbatim() {
        let req = ChatRequest::prepare("  what is a normal vector?  ").unwrap();
        assert_eq!(req.prompt, "what is a normal vector?");
        assert_eq!(req.shape, None);
    }

    #[test]
    fn test_shape_request_is_augmented() {
        let req = ChatRequest::prepare("원기둥 그려줘").unwrap();
        assert_eq!(req.shape, Some(ShapeKind::Cylinder));
        assert_eq!(req.input, "원기둥 그려줘");
        assert_ne!(req.prompt, req.input);
        assert!(req.prompt.contains("cylinder"));
    }

    #[test]
    fn test_empty_question() {
        assert_eq!(ChatRequest::prepare("   "), Err(ChatError::EmptyQuery));
    }
}
