use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::gateway::{self, Statement};

/// A contact-form submission. Append-only.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Raw contact form body as posted by the frontend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A contact form with every field present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Returns `None` when any of the four fields is absent or empty.
    pub fn validate(self) -> Option<NewMessage> {
        fn present(field: Option<String>) -> Option<String> {
            field.filter(|value| !value.is_empty())
        }

        Some(NewMessage {
            name: present(self.name)?,
            email: present(self.email)?,
            subject: present(self.subject)?,
            message: present(self.message)?,
        })
    }
}

impl Message {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        gateway::fetch_many(
            pool,
            &Statement::new("SELECT * FROM messages ORDER BY created_at DESC, id DESC"),
        )
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &NewMessage) -> Result<i64, sqlx::Error> {
        let statement =
            Statement::new("INSERT INTO messages (name, email, subject, message) VALUES (?, ?, ?, ?)")
                .bind(data.name.as_str())
                .bind(data.email.as_str())
                .bind(data.subject.as_str())
                .bind(data.message.as_str());
        Ok(gateway::execute(pool, &statement).await?.inserted_id)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: Option<(i64,)> =
            gateway::fetch_one(pool, &Statement::new("SELECT COUNT(*) FROM messages")).await?;
        Ok(row.map(|(count,)| count).unwrap_or(0))
    }
}
