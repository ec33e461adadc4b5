use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::string_list;
use crate::gateway::{self, RowLimit, Statement};

/// A portfolio project delivered for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon: Option<String>,
    /// Ordered technology stack
    pub technologies: Vec<String>,
    pub client: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    description: String,
    category: String,
    icon: Option<String>,
    technologies: Option<String>,
    client: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = sqlx::Error;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        Ok(Project {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            icon: row.icon,
            technologies: string_list::decode(row.technologies.as_deref())?,
            client: row.client,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub client: Option<String>,
}

impl ProjectPayload {
    fn encoded_technologies(&self) -> String {
        string_list::encode(self.technologies.as_deref().unwrap_or_default())
    }
}

impl Project {
    pub async fn find_all(
        pool: &SqlitePool,
        limit: Option<RowLimit>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let statement =
            Statement::new("SELECT * FROM projects ORDER BY created_at DESC, id DESC").limit(limit);
        gateway::fetch_many::<ProjectRow>(pool, &statement)
            .await?
            .into_iter()
            .map(Project::try_from)
            .collect()
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let statement = Statement::new("SELECT * FROM projects WHERE id = ?").bind(id);
        gateway::fetch_one::<ProjectRow>(pool, &statement)
            .await?
            .map(Project::try_from)
            .transpose()
    }

    pub async fn create(pool: &SqlitePool, data: &ProjectPayload) -> Result<i64, sqlx::Error> {
        let statement = Statement::new(
            "INSERT INTO projects (name, description, category, icon, technologies, client) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(data.name.as_ref())
        .bind(data.description.as_ref())
        .bind(data.category.as_ref())
        .bind(data.icon.as_ref())
        .bind(data.encoded_technologies())
        .bind(data.client.as_ref());
        Ok(gateway::execute(pool, &statement).await?.inserted_id)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &ProjectPayload,
    ) -> Result<u64, sqlx::Error> {
        let statement = Statement::new(
            "UPDATE projects
             SET name = ?, description = ?, category = ?, icon = ?, technologies = ?, client = ?,
                 updated_at = datetime('now', 'subsec')
             WHERE id = ?",
        )
        .bind(data.name.as_ref())
        .bind(data.description.as_ref())
        .bind(data.category.as_ref())
        .bind(data.icon.as_ref())
        .bind(data.encoded_technologies())
        .bind(data.client.as_ref())
        .bind(id);
        Ok(gateway::execute(pool, &statement).await?.changed_rows)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let statement = Statement::new("DELETE FROM projects WHERE id = ?").bind(id);
        Ok(gateway::execute(pool, &statement).await?.changed_rows)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: Option<(i64,)> =
            gateway::fetch_one(pool, &Statement::new("SELECT COUNT(*) FROM projects")).await?;
        Ok(row.map(|(count,)| count).unwrap_or(0))
    }
}
