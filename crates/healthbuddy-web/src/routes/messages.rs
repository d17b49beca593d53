use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use healthbuddy_core::{submit, Message, SubmitOutcome};

use crate::{
    error::{ApiError, ApiResult},
    session::{session_cookie, session_id_from_headers},
    state::AppState,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub reply: String,
    pub messages: Vec<Message>,
}

/// Transcript of the caller's session, oldest first
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let session = state.sessions.resolve(session_id_from_headers(&headers)).await;
    let messages = session.conversation.lock().await.all().to_vec();

    Ok((
        [(SET_COOKIE, session_cookie(session.id))],
        Json(ListMessagesResponse { messages }),
    )
        .into_response())
}

/// Ask a question and get the reply plus the updated transcript
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<SendMessageRequest>,
) -> ApiResult<Response> {
    if req.question.is_empty() {
        return Err(ApiError::BadRequest("question must not be empty".to_string()));
    }

    let session = state.sessions.resolve(session_id_from_headers(&headers)).await;
    let mut conversation = session.conversation.lock().await;

    let reply = match submit(&mut conversation, &state.gateway, &req.question).await? {
        SubmitOutcome::Answered(reply) => reply,
        SubmitOutcome::Skipped => {
            return Err(ApiError::BadRequest("question must not be empty".to_string()))
        }
    };

    Ok((
        [(SET_COOKIE, session_cookie(session.id))],
        Json(SendMessageResponse {
            reply,
            messages: conversation.all().to_vec(),
        }),
    )
        .into_response())
}
