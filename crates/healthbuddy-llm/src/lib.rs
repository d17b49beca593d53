pub mod types;
pub mod traits;
pub mod config;
pub mod openai;

pub use traits::{ChatClient, ChatRequest, ChatResponse, TokenUsage};
pub use config::{ClientFactory, ProviderConfig, ProviderType};
pub use openai::OpenAIClient;
pub use types::{Message, Role};
