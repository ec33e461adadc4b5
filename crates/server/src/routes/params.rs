use db::RowLimit;
use serde::Deserialize;

/// Query string accepted by list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Raw `?limit=` value. Kept as text so a malformed value means "no limit"
    /// instead of a rejected request.
    #[serde(default)]
    pub limit: Option<String>,
}

impl ListParams {
    pub fn row_limit(&self) -> Option<RowLimit> {
        self.limit.as_deref().and_then(RowLimit::parse)
    }
}

/// Parse a `/{id}` path segment. A non-numeric id can never match a row.
pub fn parse_row_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
