use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::get,
};
use db::models::project::{Project, ProjectPayload};

use super::params::{ListParams, parse_row_id};
use crate::{
    Deployment,
    error::ApiError,
    response::{CreatedResponse, MessageResponse},
};

fn not_found() -> ApiError {
    ApiError::NotFound("Project not found".to_string())
}

/// GET /api/projects - Portfolio listing, newest first
pub async fn get_projects(
    State(deployment): State<Deployment>,
    Query(params): Query<ListParams>,
) -> Result<ResponseJson<Vec<Project>>, ApiError> {
    let projects = Project::find_all(&deployment.db().pool, params.row_limit())
        .await
        .map_err(ApiError::store("fetch projects"))?;
    Ok(ResponseJson(projects))
}

/// GET /api/projects/{id}
pub async fn get_project(
    State(deployment): State<Deployment>,
    Path(id): Path<String>,
) -> Result<ResponseJson<Project>, ApiError> {
    let id = parse_row_id(&id).ok_or_else(not_found)?;
    Project::find_by_id(&deployment.db().pool, id)
        .await
        .map_err(ApiError::store("fetch project"))?
        .map(ResponseJson)
        .ok_or_else(not_found)
}

/// POST /api/projects - Missing technologies are stored as an empty list
pub async fn create_project(
    State(deployment): State<Deployment>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<CreatedResponse>), ApiError> {
    let Json(payload) = payload.map_err(ApiError::payload("create project"))?;
    let id = Project::create(&deployment.db().pool, &payload)
        .await
        .map_err(ApiError::store("create project"))?;
    Ok((
        StatusCode::CREATED,
        ResponseJson(CreatedResponse {
            id,
            message: "Project created",
        }),
    ))
}

/// PUT /api/projects/{id} - Replace a project. An unknown id is a silent no-op.
pub async fn update_project(
    State(deployment): State<Deployment>,
    Path(id): Path<String>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let Json(payload) = payload.map_err(ApiError::payload("update project"))?;
    if let Some(id) = parse_row_id(&id) {
        let changed = Project::update(&deployment.db().pool, id, &payload)
            .await
            .map_err(ApiError::store("update project"))?;
        if changed == 0 {
            tracing::debug!(id, "Project update matched no row");
        }
    }
    Ok(ResponseJson(MessageResponse::new("Project updated")))
}

/// DELETE /api/projects/{id} - An unknown id is a silent no-op.
pub async fn delete_project(
    State(deployment): State<Deployment>,
    Path(id): Path<String>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    if let Some(id) = parse_row_id(&id) {
        Project::delete(&deployment.db().pool, id)
            .await
            .map_err(ApiError::store("delete project"))?;
    }
    Ok(ResponseJson(MessageResponse::new("Project deleted")))
}

pub fn router() -> Router<Deployment> {
    Router::new()
        .route("/projects", get(get_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
}
