use healthbuddy_llm::Message;
use serde::Serialize;

/// Ordered, append-only transcript of one session (oldest first).
///
/// System messages are never stored; `append` drops them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        if message.is_system() {
            tracing::warn!("Dropping system message; the persona is not part of the transcript");
            return;
        }
        self.messages.push(message);
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
