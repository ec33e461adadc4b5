use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::{get, post},
};
use db::{
    is_unique_violation,
    models::subscriber::{SubscribeRequest, Subscriber},
};

use crate::{Deployment, error::ApiError, response::MessageResponse};

/// POST /api/subscribe - Add a newsletter subscriber
pub async fn subscribe(
    State(deployment): State<Deployment>,
    request: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<MessageResponse>), ApiError> {
    let request = request.map(|Json(request)| request).unwrap_or_default();
    let email = request
        .valid_email()
        .ok_or_else(|| ApiError::BadRequest("Valid email is required".to_string()))?;

    match Subscriber::create(&deployment.db().pool, email).await {
        Ok(_) => Ok((
            StatusCode::CREATED,
            ResponseJson(MessageResponse::new("Subscribed successfully")),
        )),
        Err(e) if is_unique_violation(&e) => {
            Err(ApiError::Conflict("Email already subscribed".to_string()))
        }
        Err(e) => Err(ApiError::store("subscribe")(e)),
    }
}

/// GET /api/subscribers
pub async fn get_subscribers(
    State(deployment): State<Deployment>,
) -> Result<ResponseJson<Vec<Subscriber>>, ApiError> {
    let subscribers = Subscriber::find_all(&deployment.db().pool)
        .await
        .map_err(ApiError::store("fetch subscribers"))?;
    Ok(ResponseJson(subscribers))
}

pub fn router() -> Router<Deployment> {
    Router::new()
        .route("/subscribe", post(subscribe))
        .route("/subscribers", get(get_subscribers))
}
