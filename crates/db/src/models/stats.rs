use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::{message::Message, post::Post, product::Product, project::Project, subscriber::Subscriber};

/// Row counts for every table, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStats {
    pub products: i64,
    pub posts: i64,
    pub projects: i64,
    pub messages: i64,
    pub subscribers: i64,
}

impl SiteStats {
    pub async fn collect(pool: &SqlitePool) -> Result<Self, sqlx::Error> {
        Ok(SiteStats {
            products: Product::count(pool).await?,
            posts: Post::count(pool).await?,
            projects: Project::count(pool).await?,
            messages: Message::count(pool).await?,
            subscribers: Subscriber::count(pool).await?,
        })
    }
}
