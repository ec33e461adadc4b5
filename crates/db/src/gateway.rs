//! Parameterized query primitives shared by every model.
//!
//! A [`Statement`] is assembled only from `&'static str` fragments, so the SQL
//! text is fixed at compile time and every runtime value travels as a
//! positional `?` binding. The three primitives ([`execute`], [`fetch_one`],
//! [`fetch_many`]) return the driver's [`sqlx::Error`] untouched; deciding what
//! a failure means is left to the caller.

use sqlx::{
    FromRow, Sqlite, SqlitePool,
    query::{Query, QueryAs},
    sqlite::{SqliteArguments, SqliteRow},
};

/// A single positional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Int(i64),
    Text(Option<String>),
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Int(value)
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Param::Text(Some(value))
    }
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(Some(value.to_string()))
    }
}

impl From<Option<String>> for Param {
    fn from(value: Option<String>) -> Self {
        Param::Text(value)
    }
}

impl From<Option<&String>> for Param {
    fn from(value: Option<&String>) -> Self {
        Param::Text(value.cloned())
    }
}

/// Optional bound on how many rows a list query returns.
///
/// Only strictly positive values are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLimit(i64);

impl RowLimit {
    pub fn new(limit: i64) -> Option<Self> {
        (limit > 0).then_some(Self(limit))
    }

    /// Lenient parse of a `?limit=` value. Anything that is not a positive
    /// integer yields `None`, meaning "no limit".
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().and_then(Self::new)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// Outcome of an insert/update/delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Row id assigned by the last successful insert on the connection.
    pub inserted_id: i64,
    pub changed_rows: u64,
}

/// SQL template plus its positional parameters.
#[derive(Debug, Clone, Default)]
pub struct Statement {
    sql: String,
    params: Vec<Param>,
}

impl Statement {
    pub fn new(sql: &'static str) -> Self {
        Self {
            sql: sql.to_string(),
            params: Vec::new(),
        }
    }

    /// Append a fixed SQL fragment.
    pub fn push(mut self, fragment: &'static str) -> Self {
        self.sql.push_str(fragment);
        self
    }

    /// Bind the next `?` placeholder.
    pub fn bind(mut self, value: impl Into<Param>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Append `LIMIT ?` when a limit is present.
    pub fn limit(self, limit: Option<RowLimit>) -> Self {
        match limit {
            Some(limit) => self.push(" LIMIT ?").bind(limit.get()),
            None => self,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    fn query(&self) -> Query<'_, Sqlite, SqliteArguments<'_>> {
        self.params
            .iter()
            .fold(sqlx::query(&self.sql), |query, param| match param {
                Param::Int(value) => query.bind(*value),
                Param::Text(value) => query.bind(value.as_deref()),
            })
    }

    fn query_as<T>(&self) -> QueryAs<'_, Sqlite, T, SqliteArguments<'_>>
    where
        T: for<'r> FromRow<'r, SqliteRow>,
    {
        self.params
            .iter()
            .fold(sqlx::query_as::<_, T>(&self.sql), |query, param| match param {
                Param::Int(value) => query.bind(*value),
                Param::Text(value) => query.bind(value.as_deref()),
            })
    }
}

/// Run an insert, update or delete.
pub async fn execute(pool: &SqlitePool, statement: &Statement) -> Result<ExecOutcome, sqlx::Error> {
    let result = statement.query().execute(pool).await?;
    Ok(ExecOutcome {
        inserted_id: result.last_insert_rowid(),
        changed_rows: result.rows_affected(),
    })
}

/// Fetch at most one row. No row is `Ok(None)`, not an error.
pub async fn fetch_one<T>(pool: &SqlitePool, statement: &Statement) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    statement.query_as::<T>().fetch_optional(pool).await
}

/// Fetch every row in the order the query yields them.
pub async fn fetch_many<T>(pool: &SqlitePool, statement: &Statement) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    statement.query_as::<T>().fetch_all(pool).await
}

/// Whether a store failure is a UNIQUE / PRIMARY KEY constraint violation.
///
/// Uses the driver's structured error kind rather than the message text.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DBService;

    #[test]
    fn test_row_limit_accepts_only_positive_integers() {
        assert_eq!(RowLimit::parse("3").map(RowLimit::get), Some(3));
        assert_eq!(RowLimit::parse(" 12 ").map(RowLimit::get), Some(12));
        assert_eq!(RowLimit::parse("0"), None);
        assert_eq!(RowLimit::parse("-1"), None);
        assert_eq!(RowLimit::parse("abc"), None);
        assert_eq!(RowLimit::parse(""), None);
        // Numeric prefixes are not truncated into a limit.
        assert_eq!(RowLimit::parse("5abc"), None);
        assert_eq!(RowLimit::parse("2.5"), None);
    }

    #[test]
    fn test_limit_clause_binds_instead_of_interpolating() {
        let stmt = Statement::new("SELECT * FROM products ORDER BY created_at DESC")
            .limit(RowLimit::new(5));
        assert_eq!(
            stmt.sql(),
            "SELECT * FROM products ORDER BY created_at DESC LIMIT ?"
        );
        assert_eq!(stmt.params(), &[Param::Int(5)]);

        let unbounded = Statement::new("SELECT * FROM products").limit(None);
        assert_eq!(unbounded.sql(), "SELECT * FROM products");
        assert!(unbounded.params().is_empty());
    }

    #[tokio::test]
    async fn test_execute_reports_inserted_id_and_changes() {
        let db = DBService::in_memory().await.unwrap();

        let outcome = execute(
            &db.pool,
            &Statement::new("INSERT INTO subscribers (email) VALUES (?)").bind("a@example.com"),
        )
        .await
        .unwrap();
        assert_eq!(outcome.inserted_id, 1);
        assert_eq!(outcome.changed_rows, 1);

        let outcome = execute(
            &db.pool,
            &Statement::new("DELETE FROM subscribers WHERE id = ?").bind(42_i64),
        )
        .await
        .unwrap();
        assert_eq!(outcome.changed_rows, 0);
    }

    #[tokio::test]
    async fn test_hostile_text_is_bound_as_data() {
        let db = DBService::in_memory().await.unwrap();
        let hostile = "x'); DROP TABLE subscribers; --@";

        execute(
            &db.pool,
            &Statement::new("INSERT INTO subscribers (email) VALUES (?)").bind(hostile),
        )
        .await
        .unwrap();

        let row: Option<(String,)> = fetch_one(
            &db.pool,
            &Statement::new("SELECT email FROM subscribers WHERE email = ?").bind(hostile),
        )
        .await
        .unwrap();
        assert_eq!(row.map(|(email,)| email).as_deref(), Some(hostile));
    }

    #[tokio::test]
    async fn test_fetch_one_absent_is_none() {
        let db = DBService::in_memory().await.unwrap();
        let row: Option<(i64,)> = fetch_one(
            &db.pool,
            &Statement::new("SELECT id FROM products WHERE id = ?").bind(1_i64),
        )
        .await
        .unwrap();
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn test_unique_violation_is_classified() {
        let db = DBService::in_memory().await.unwrap();
        let insert = Statement::new("INSERT INTO subscribers (email) VALUES (?)").bind("dup@example.com");

        execute(&db.pool, &insert).await.unwrap();
        let err = execute(&db.pool, &insert).await.unwrap_err();
        assert!(is_unique_violation(&err));

        let not_null = execute(
            &db.pool,
            &Statement::new("INSERT INTO subscribers (email) VALUES (?)").bind(None::<String>),
        )
        .await
        .unwrap_err();
        assert!(!is_unique_violation(&not_null));
    }

    #[tokio::test]
    async fn test_malformed_query_propagates() {
        let db = DBService::in_memory().await.unwrap();
        let result = fetch_many::<(i64,)>(&db.pool, &Statement::new("SELECT id FROM nowhere")).await;
        assert!(result.is_err());
    }
}
