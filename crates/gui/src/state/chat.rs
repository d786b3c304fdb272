use std::sync::Arc;

use shared::ShapeKind;
use tokio::sync::mpsc;

use crate::chat::{self, ChatError, ChatReply, ChatRequest, GeminiClient, GeminiConfig};

use super::scene::SceneState;

/// Role of a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub is_error: bool,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            is_error: false,
        }
    }

    fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            is_error: true,
        }
    }
}

/// Chat panel state; requests run on a background tokio runtime and replies
/// come back over a channel polled once per frame.
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub is_loading: bool,
    pub last_failed_input: Option<String>,
    runtime: Option<Arc<tokio::runtime::Runtime>>,
    pub(super) tx: mpsc::UnboundedSender<ChatReply>,
    rx: mpsc::UnboundedReceiver<ChatReply>,
    repaint: Option<egui::Context>,
}

impl Default for ChatState {
    fn default() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            messages: Vec::new(),
            input: String::new(),
            is_loading: false,
            last_failed_input: None,
            runtime: None,
            tx,
            rx,
            repaint: None,
        }
    }
}

impl ChatState {
    /// Wake the UI when a reply arrives.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    /// Send the current input.
    pub fn send_message(&mut self, config: GeminiConfig) {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.is_loading {
            return;
        }
        self.input.clear();
        self.messages.push(ChatMessage::user(&text));
        self.dispatch(&text, config);
    }

    /// Resend the last failed question, replacing its error message.
    pub fn retry(&mut self, config: GeminiConfig) {
        let Some(text) = self.last_failed_input.take() else {
            return;
        };
        if self.messages.last().is_some_and(|m| m.is_error) {
            self.messages.pop();
        }
        self.dispatch(&text, config);
    }

    fn dispatch(&mut self, text: &str, config: GeminiConfig) {
        let request = match ChatRequest::prepare(text) {
            Ok(request) => request,
            Err(e) => {
                self.fail(text, &e);
                return;
            }
        };
        if config.api_key.trim().is_empty() {
            self.fail(text, &ChatError::MissingApiKey);
            return;
        }
        let runtime = match self.runtime() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::error!("Failed to start chat runtime: {e}");
                self.fail(text, &ChatError::Network(e.to_string()));
                return;
            }
        };

        tracing::info!(shape = ?request.shape, "Sending chat request");
        self.is_loading = true;
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        runtime.spawn(async move {
            let client = GeminiClient::new(config);
            let reply = chat::ask(&client, request).await;
            // Receiver only goes away with the app
            let _ = tx.send(reply);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    fn runtime(&mut self) -> std::io::Result<Arc<tokio::runtime::Runtime>> {
        if let Some(runtime) = &self.runtime {
            return Ok(runtime.clone());
        }
        let runtime = Arc::new(
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .thread_name("chat")
                .enable_all()
                .build()?,
        );
        self.runtime = Some(runtime.clone());
        Ok(runtime)
    }

    fn fail(&mut self, text: &str, error: &ChatError) {
        self.messages.push(ChatMessage::error(error.user_message()));
        self.last_failed_input = Some(text.to_string());
    }

    /// Apply replies that arrived since the last frame. Returns the shapes
    /// that were created.
    pub fn poll_responses(&mut self, scene: &mut SceneState) -> Vec<ShapeKind> {
        let mut created = Vec::new();
        while let Ok(reply) = self.rx.try_recv() {
            if let Some(kind) = self.apply_reply(reply, scene) {
                created.push(kind);
            }
        }
        created
    }

    /// Show one reply; a successful answer to a drawing request creates the shape.
    pub fn apply_reply(&mut self, reply: ChatReply, scene: &mut SceneState) -> Option<ShapeKind> {
        self.is_loading = false;
        match reply.answer {
            Ok(answer) => {
                self.messages.push(ChatMessage::assistant(answer));
                self.last_failed_input = None;
                let kind = reply.request.shape?;
                scene.create_primitive(kind);
                Some(kind)
            }
            Err(e) => {
                self.fail(&reply.request.input, &e);
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.input.clear();
        self.last_failed_input = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ShapeSpec;

    fn reply(input: &str, answer: Result<&str, ChatError>) -> ChatReply {
        ChatReply {
            request: ChatRequest::prepare(input).unwrap(),
            answer: answer.map(str::to_string),
        }
    }

    #[test]
    fn test_success_creates_detected_shape() {
        let mut chat = ChatState::default();
        let mut scene = SceneState::default();
        chat.is_loading = true;
        let created = chat.apply_reply(reply("원뿔 그려줘", Ok("A cone has...")), &mut scene);
        assert_eq!(created, Some(ShapeKind::Cone));
        assert!(!chat.is_loading);
        assert_eq!(chat.messages.last().unwrap().text, "A cone has...");
        assert_eq!(
            scene.shape().unwrap().spec,
            ShapeSpec::Primitive { kind: ShapeKind::Cone }
        );
    }

    #[test]
    fn test_failure_keeps_scene_and_allows_retry() {
        let mut chat = ChatState::default();
        let mut scene = SceneState::default();
        let err = ChatError::Api {
            status: 403,
            reason: "Forbidden".to_string(),
        };
        let created = chat.apply_reply(reply("큐브 그려줘", Err(err)), &mut scene);
        assert_eq!(created, None);
        assert!(scene.shape().is_none());
        let last = chat.messages.last().unwrap();
        assert!(last.is_error);
        assert!(last.text.contains("403"));
        assert_eq!(chat.last_failed_input.as_deref(), Some("큐브 그려줘"));
    }

    #[test]
    fn test_missing_key_reported_without_request() {
        let mut chat = ChatState::default();
        chat.input = "hello".to_string();
        chat.send_message(GeminiConfig::new(""));
        assert!(!chat.is_loading);
        assert_eq!(chat.messages.len(), 2);
        assert!(chat.messages[1].is_error);
        assert_eq!(chat.last_failed_input.as_deref(), Some("hello"));
        assert!(chat.input.is_empty());
    }

    #[test]
    fn test_retry_replaces_error_message() {
        let mut chat = ChatState::default();
        chat.input = "hello".to_string();
        chat.send_message(GeminiConfig::new(""));
        chat.retry(GeminiConfig::new(""));
        // Still failing: one user message and one (fresh) error
        assert_eq!(chat.messages.len(), 2);
        assert!(chat.messages[1].is_error);
    }

    #[test]
    fn test_empty_input_ignored() {
        let mut chat = ChatState::default();
        chat.input = "   ".to_string();
        chat.send_message(GeminiConfig::new("key"));
        assert!(chat.messages.is_empty());
    }
}
