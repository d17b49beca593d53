use crate::conversation::Conversation;
use crate::error::Result;
use crate::gateway::CompletionGateway;
use healthbuddy_llm::Message;

/// What a submit did to the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty input: nothing sent, nothing stored
    Skipped,
    /// The user turn and this reply were appended
    Answered(String),
}

/// One request-handling cycle for a session.
///
/// Appends the user's message, asks the gateway, then appends the reply. The
/// empty string is filtered here, before the gateway is involved. If the
/// gateway fails the user's message stays in the transcript and no reply is
/// appended.
pub async fn submit(
    conversation: &mut Conversation,
    gateway: &CompletionGateway,
    input: &str,
) -> Result<SubmitOutcome> {
    if input.is_empty() {
        return Ok(SubmitOutcome::Skipped);
    }

    conversation.append(Message::human(input));

    let reply = gateway.complete(input).await?;
    conversation.append(Message::ai(reply.clone()));

    tracing::info!(transcript_len = conversation.len(), "Exchange completed");
    Ok(SubmitOutcome::Answered(reply))
}
