use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::string_list;
use crate::gateway::{self, RowLimit, Statement};

/// A product shown in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Emoji shown on the product card
    pub icon: Option<String>,
    /// Ordered feature bullet points
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    category: String,
    icon: Option<String>,
    features: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = sqlx::Error;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            icon: row.icon,
            features: string_list::decode(row.features.as_deref())?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Body of a create or a whole-row update.
///
/// Every field is optional at the JSON layer; the NOT NULL constraints decide
/// what a valid row is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub icon: Option<String>,
    pub features: Option<Vec<String>>,
}

impl ProductPayload {
    fn encoded_features(&self) -> String {
        string_list::encode(self.features.as_deref().unwrap_or_default())
    }
}

impl Product {
    pub async fn find_all(
        pool: &SqlitePool,
        limit: Option<RowLimit>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let statement =
            Statement::new("SELECT * FROM products ORDER BY created_at DESC, id DESC").limit(limit);
        gateway::fetch_many::<ProductRow>(pool, &statement)
            .await?
            .into_iter()
            .map(Product::try_from)
            .collect()
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let statement = Statement::new("SELECT * FROM products WHERE id = ?").bind(id);
        gateway::fetch_one::<ProductRow>(pool, &statement)
            .await?
            .map(Product::try_from)
            .transpose()
    }

    /// Insert a product and return its id.
    pub async fn create(pool: &SqlitePool, data: &ProductPayload) -> Result<i64, sqlx::Error> {
        let statement = Statement::new(
            "INSERT INTO products (name, description, category, icon, features) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(data.name.as_ref())
        .bind(data.description.as_ref())
        .bind(data.category.as_ref())
        .bind(data.icon.as_ref())
        .bind(data.encoded_features());
        Ok(gateway::execute(pool, &statement).await?.inserted_id)
    }

    /// Replace every mutable field. Returns the number of rows changed, which is
    /// zero when no product has this id.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: &ProductPayload,
    ) -> Result<u64, sqlx::Error> {
        let statement = Statement::new(
            "UPDATE products
             SET name = ?, description = ?, category = ?, icon = ?, features = ?,
                 updated_at = datetime('now', 'subsec')
             WHERE id = ?",
        )
        .bind(data.name.as_ref())
        .bind(data.description.as_ref())
        .bind(data.category.as_ref())
        .bind(data.icon.as_ref())
        .bind(data.encoded_features())
        .bind(id);
        Ok(gateway::execute(pool, &statement).await?.changed_rows)
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let statement = Statement::new("DELETE FROM products WHERE id = ?").bind(id);
        Ok(gateway::execute(pool, &statement).await?.changed_rows)
    }

    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let row: Option<(i64,)> =
            gateway::fetch_one(pool, &Statement::new("SELECT COUNT(*) FROM products")).await?;
        Ok(row.map(|(count,)| count).unwrap_or(0))
    }
}
