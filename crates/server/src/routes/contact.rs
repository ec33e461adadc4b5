use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, post},
};
use db::models::message::{ContactForm, Message};

use crate::{Deployment, error::ApiError, response::MessageResponse};

/// POST /api/contact - Store a contact-form submission
///
/// All four fields are required; the store is not touched otherwise. A body
/// that is not a JSON object counts as an empty form.
pub async fn submit_contact(
    State(deployment): State<Deployment>,
    form: Result<Json<ContactForm>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<MessageResponse>), ApiError> {
    let message = form
        .map(|Json(form)| form)
        .unwrap_or_default()
        .validate()
        .ok_or_else(|| ApiError::BadRequest("All fields are required".to_string()))?;

    Message::create(&deployment.db().pool, &message)
        .await
        .map_err(ApiError::store("send message"))?;

    Ok((
        StatusCode::CREATED,
        ResponseJson(MessageResponse::new("Message sent successfully")),
    ))
}

/// GET /api/messages - Every submission, newest first
pub async fn get_messages(
    State(deployment): State<Deployment>,
) -> Result<ResponseJson<Vec<Message>>, ApiError> {
    let messages = Message::find_all(&deployment.db().pool)
        .await
        .map_err(ApiError::store("fetch messages"))?;
    Ok(ResponseJson(messages))
}

pub fn router() -> Router<Deployment> {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/messages", get(get_messages))
}
