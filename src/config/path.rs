//! `~` expansion for the source path

use std::path::{Path, PathBuf};

/// Source of the invoking user's home directory
pub trait HomeDirProvider {
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Looks the home directory up through the platform's conventions
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHomeDir;

impl HomeDirProvider for SystemHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// A fixed home directory, for tests and embedding
#[derive(Debug, Clone)]
pub struct FixedHomeDir(pub PathBuf);

impl HomeDirProvider for FixedHomeDir {
    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

/// Expand a leading `~` to the user's home directory.
///
/// Only `~` on its own and `~/...` are expanded. `~name` forms and paths
/// without a leading tilde come back unchanged, as does everything when no
/// home directory is known. The filesystem is not consulted.
pub fn expand_user(path: &str, home: &dyn HomeDirProvider) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with(std::path::MAIN_SEPARATOR) => rest,
        _ => return PathBuf::from(path),
    };

    match home.home_dir() {
        Some(home) => {
            let rest = rest.trim_start_matches(|c: char| c == '/' || c == std::path::MAIN_SEPARATOR);
            if rest.is_empty() {
                home
            } else {
                home.join(Path::new(rest))
            }
        }
        None => PathBuf::from(path),
    }
}
