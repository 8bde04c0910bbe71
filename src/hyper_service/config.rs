use super::handler::{BoxHandler, Handler};
use super::not_found::not_found;
use super::static_files::StaticFiles;

use std::path::PathBuf;

/// Construction options for a [`RouterService`](super::RouterService).
///
/// By default unmatched requests get the built-in 404 responder, and paths
/// starting with `/public` are served from the `public` directory.
pub struct Config {
    pub(super) not_found: BoxHandler,
    pub(super) static_files: Option<StaticFiles>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            not_found: Box::new(not_found),
            static_files: Some(StaticFiles::default()),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the not-found handler. It fully owns the response.
    pub fn not_found(mut self, h: impl Handler + Send + Sync + 'static) -> Self {
        self.not_found = Box::new(h);
        self
    }

    pub fn static_prefix(mut self, prefix: impl Into<String>) -> Self {
        let files = self.static_files.take().unwrap_or_default();
        self.static_files = Some(files.with_prefix(prefix));
        self
    }

    pub fn static_root(mut self, root: impl Into<PathBuf>) -> Self {
        let files = self.static_files.take().unwrap_or_default();
        self.static_files = Some(files.with_root(root));
        self
    }

    pub fn without_static(mut self) -> Self {
        self.static_files = None;
        self
    }
}
