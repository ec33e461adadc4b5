use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::gateway::{self, Statement};

/// A newsletter subscriber. Emails are unique across the table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeRequest {
    pub email: Option<String>,
}

impl SubscribeRequest {
    /// The email, if it is present and contains an `@`.
    pub fn valid_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| email.contains('@'))
    }
}

impl Subscriber {
    pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        gateway::fetch_many(
            pool,
            &Statement::new("SELECT * FROM subscribers ORDER BY created_at DESC, id DESC"),
        )
        .await
    }

    /// Insert a subscriber. A duplicate email fails with a unique violation
    /// (see [`crate::is_unique_violation`]).
    pub async fn create(pool: &SqlitePool, email: &str) -> Result<i64, sqlx::Error> {
        let statement = Statement::new("INSERT INTO subscribers (email) VALUES (?)").bind(email);
        Ok(gateway::execute(pool, &statement).await?.inserted_id)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: Option<(i64,)> =
            gateway::fetch_one(pool, &Statement::new("SELECT COUNT(*) FROM subscribers")).await?;
        Ok(row.map(|(count,)| count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_needs_an_at_sign() {
        let ok = SubscribeRequest {
            email: Some("fan@genzsmart.dev".to_string()),
        };
        assert_eq!(ok.valid_email(), Some("fan@genzsmart.dev"));

        let bad = SubscribeRequest {
            email: Some("not-an-email".to_string()),
        };
        assert_eq!(bad.valid_email(), None);

        assert_eq!(SubscribeRequest::default().valid_email(), None);
    }
}
