//! Embedded array fields: a list of strings persisted as one JSON text column.

/// Serialize a list for storage in a TEXT column.
pub fn encode(list: &[String]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored column. NULL, empty text and JSON `null` all decode to an
/// empty list; anything else must be a JSON array of strings.
pub fn decode(raw: Option<&str>) -> Result<Vec<String>, sqlx::Error> {
    match raw {
        None => Ok(Vec::new()),
        Some(text) if text.trim().is_empty() => Ok(Vec::new()),
        Some(text) => serde_json::from_str::<Option<Vec<String>>>(text)
            .map(Option::unwrap_or_default)
            .map_err(|e| sqlx::Error::Decode(Box::new(e))),
    }
}
