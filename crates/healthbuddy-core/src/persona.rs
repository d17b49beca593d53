use healthbuddy_llm::Message;

/// Sentence the model is told to answer with for off-topic questions.
pub const REFUSAL_MESSAGE: &str = "I can only answer healthcare-related questions. Please ask about health, diet, exercise, or medical topics.";

/// System prompt sent ahead of every question.
pub const HEALTHCARE_PERSONA: &str = concat!(
    "You are a healthcare expert with 10+ years of experience. You only answer questions related to healthcare. \n",
    "If a question is not about healthcare, politely refuse with: \"I can only answer healthcare-related questions. Please ask about health, diet, exercise, or medical topics.\"\n",
    "\n",
    "Keep your responses:\n",
    "- Short and practical\n",
    "- In a friendly tone\n",
    "- In Hinglish when possible\n",
    "- Focused on actionable advice",
);

/// Fixed instructions injected as the system message of each request.
///
/// The persona is never part of a [`crate::Conversation`]; a fresh system
/// message is built from it per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    prompt: String,
}

impl Persona {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    pub fn healthcare() -> Self {
        Self::new(HEALTHCARE_PERSONA)
    }

    pub fn system_message(&self) -> Message {
        Message::system(self.prompt.clone())
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::healthcare()
    }
}
