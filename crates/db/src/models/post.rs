use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::gateway::{self, RowLimit, Statement};

/// A blog post.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Short teaser shown in post listings
    pub excerpt: Option<String>,
    pub category: String,
    pub icon: Option<String>,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPayload {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub author: Option<String>,
}

impl Post {
    pub async fn find_all(
        pool: &SqlitePool,
        limit: Option<RowLimit>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let statement =
            Statement::new("SELECT * FROM posts ORDER BY created_at DESC, id DESC").limit(limit);
        gateway::fetch_many(pool, &statement).await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        gateway::fetch_one(pool, &Statement::new("SELECT * FROM posts WHERE id = ?").bind(id)).await
    }

    pub async fn create(pool: &SqlitePool, data: &PostPayload) -> Result<i64, sqlx::Error> {
        let statement = Statement::new(
            "INSERT INTO posts (title, content, excerpt, category, icon, author) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(data.title.as_ref())
        .bind(data.content.as_ref())
        .bind(data.excerpt.as_ref())
        .bind(data.category.as_ref())
        .bind(data.icon.as_ref())
        .bind(data.author.as_ref());
        Ok(gateway::execute(pool, &statement).await?.inserted_id)
    }

    pub async fn update(pool: &SqlitePool, id: i64, data: &PostPayload) -> Result<u64, sqlx::Error> {
        let statement = Statement::new(
            "UPDATE posts
             SET title = ?, content = ?, excerpt = ?, category = ?, icon = ?, author = ?,
                 updated_at = datetime('now', 'subsec')
             WHERE id = ?",
        )
        .bind(data.title.as_ref())
        .bind(data.content.as_ref())
        .bind(data.excerpt.as_ref())
        .bind(data.category.as_ref())
        .bind(data.icon.as_ref())
        .bind(data.author.as_ref())
        .bind(id);
        Ok(gateway::execute(pool, &statement).await?.changed_rows)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let statement = Statement::new("DELETE FROM posts WHERE id = ?").bind(id);
        Ok(gateway::execute(pool, &statement).await?.changed_rows)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: Option<(i64,)> =
            gateway::fetch_one(pool, &Statement::new("SELECT COUNT(*) FROM posts")).await?;
        Ok(row.map(|(count,)| count).unwrap_or(0))
    }
}
