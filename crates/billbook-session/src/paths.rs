//! # Platform Paths
//!
//! Default location of the store file, resolved per platform:
//! - Linux: `~/.local/share/billbook/billbook.json`
//! - macOS: `~/Library/Application Support/com.billbook.BillBook/billbook.json`
//! - Windows: `%APPDATA%\billbook\BillBook\data\billbook.json`

use std::path::PathBuf;

use directories::ProjectDirs;

/// Store file name inside the per-user data directory.
const STORE_FILE: &str = "billbook.json";

/// Resolves the default store path for this user.
///
/// `None` when the platform exposes no home directory (some containers).
pub fn default_store_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "billbook", "BillBook")
        .map(|dirs| dirs.data_dir().join(STORE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_ends_with_store_file() {
        if let Some(path) = default_store_path() {
            assert!(path.ends_with("billbook.json"));
        }
    }
}
