pub mod conversation;
pub mod error;
pub mod gateway;
pub mod persona;
pub mod session;

pub use conversation::Conversation;
pub use error::{ChatError, Result};
pub use gateway::{CompletionGateway, DEFAULT_MODEL};
pub use persona::{Persona, HEALTHCARE_PERSONA, REFUSAL_MESSAGE};
pub use session::{submit, SubmitOutcome};

pub use healthbuddy_llm::{Message, Role};
