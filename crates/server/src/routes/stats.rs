use axum::{extract::State, response::Json as ResponseJson};
use db::models::stats::SiteStats;

use crate::{Deployment, error::ApiError};

/// GET /api/stats - Row counts for the dashboard
pub async fn get_stats(
    State(deployment): State<Deployment>,
) -> Result<ResponseJson<SiteStats>, ApiError> {
    let stats = SiteStats::collect(&deployment.db().pool)
        .await
        .map_err(ApiError::store("fetch statistics"))?;
    Ok(ResponseJson(stats))
}
