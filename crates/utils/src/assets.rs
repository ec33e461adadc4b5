use std::path::PathBuf;

use directories::ProjectDirs;

const PROJECT_ROOT: &str = env!("CARGO_MANIFEST_DIR");

/// File name of the SQLite store inside the asset directory.
pub const DATABASE_FILE_NAME: &str = "genzsmart.db";

/// Directory holding runtime data (the database file and optional log files).
///
/// Debug builds keep everything under `dev_assets/` at the workspace root so a
/// development run never touches the user's data directory. Nothing is
/// created here; whoever writes into the directory creates it.
pub fn asset_dir() -> PathBuf {
    if cfg!(debug_assertions) {
        PathBuf::from(PROJECT_ROOT).join("../../dev_assets")
    } else {
        ProjectDirs::from("com", "genzsmart", "genz-smart")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("data"))
    }
}

/// Get the database file path.
///
/// Default: `{asset_dir}/genzsmart.db`
pub fn database_path() -> PathBuf {
    asset_dir().join(DATABASE_FILE_NAME)
}

/// Directory the static frontend is served from.
pub fn public_dir() -> PathBuf {
    if cfg!(debug_assertions) {
        PathBuf::from(PROJECT_ROOT).join("../../public")
    } else {
        PathBuf::from("public")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_lives_in_asset_dir() {
        let path = database_path();
        assert!(path.ends_with(DATABASE_FILE_NAME));
        assert_eq!(path.parent(), Some(asset_dir().as_path()));
    }

    #[test]
    fn test_public_dir_is_outside_asset_dir() {
        assert!(!public_dir().starts_with(asset_dir()));
    }
}
