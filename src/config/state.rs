// Application state module
// Immutable state shared across connection tasks

use std::path::PathBuf;

use super::types::Config;

/// Shared application state: the loaded configuration plus the
/// canonicalized document root every request path must stay under.
pub struct AppState {
    pub config: Config,
    pub root: PathBuf,
}

impl AppState {
    /// Canonicalize the document root once at startup. Serving refuses to
    /// start when the root itself is missing or unreadable.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let root = std::path::Path::new(&config.http.root).canonicalize()?;
        Ok(Self { config, root })
    }
}
