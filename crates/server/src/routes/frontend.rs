use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

/// Static files from `public_dir`; any path without a matching file gets the
/// entry document so the frontend can handle its own navigation.
pub fn serve_frontend(public_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")))
}
