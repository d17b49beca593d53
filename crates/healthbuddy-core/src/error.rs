use thiserror::Error;

/// Failures of a chat exchange. Every variant is a gateway failure: the
/// conversation store itself cannot fail.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Completion gateway error: {0:#}")]
    Gateway(#[from] anyhow::Error),

    #[error("Completion response contained no text")]
    EmptyCompletion,
}

pub type Result<T> = std::result::Result<T, ChatError>;
