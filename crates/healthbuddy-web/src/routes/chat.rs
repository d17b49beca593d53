use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use healthbuddy_core::{submit, SubmitOutcome};

use crate::{
    error::ApiResult,
    session::{session_cookie, session_id_from_headers},
    state::AppState,
};

pub const GATEWAY_FAILURE_NOTICE: &str =
    "Sorry, Health Buddy could not reach the AI service. Please try again in a moment.";

#[derive(Debug, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub question: String,
}

/// Render the chat page for the caller's session
pub async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<Response> {
    let session = state.sessions.resolve(session_id_from_headers(&headers)).await;
    let conversation = session.conversation.lock().await;
    let html = state.pages.render(conversation.all(), None)?;

    Ok(([(SET_COOKIE, session_cookie(session.id))], Html(html)).into_response())
}

/// Form submit: run one exchange, then send the browser back to the page
pub async fn ask(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<AskForm>,
) -> ApiResult<Response> {
    let session = state.sessions.resolve(session_id_from_headers(&headers)).await;
    let cookie = [(SET_COOKIE, session_cookie(session.id))];
    let mut conversation = session.conversation.lock().await;

    match submit(&mut conversation, &state.gateway, &form.question).await {
        Ok(SubmitOutcome::Skipped) | Ok(SubmitOutcome::Answered(_)) => {
            Ok((cookie, Redirect::to("/")).into_response())
        }
        Err(e) => {
            tracing::error!(session_id = %session.id, error = %e, "Exchange failed");
            let html = state
                .pages
                .render(conversation.all(), Some(GATEWAY_FAILURE_NOTICE))?;
            Ok((StatusCode::BAD_GATEWAY, cookie, Html(html)).into_response())
        }
    }
}
