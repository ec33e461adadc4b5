use std::path::Path;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::Deployment;

pub mod contact;
pub mod frontend;
pub mod health;
pub mod newsletter;
pub mod params;
pub mod posts;
pub mod products;
pub mod projects;
pub mod stats;

/// Build the full application: JSON API under `/api`, static frontend for
/// everything else.
pub fn router(deployment: Deployment, public_dir: &Path) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/stats", get(stats::get_stats))
        .merge(products::router())
        .merge(posts::router())
        .merge(projects::router())
        .merge(contact::router())
        .merge(newsletter::router())
        .with_state(deployment);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(frontend::serve_frontend(public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
