//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`
//! ([`LookupError`], [`ConfigError`]), while the CLI uses `anyhow` for
//! convenient error propagation.
//!
//! # Example
//!
//! ```ignore
//! use video_minder::error::{Result, ResultExt};
//!
//! async fn fetch(provider: &VideoProvider, info: &VideoInfo) -> Result<()> {
//!     let result = provider
//!         .resolve_video_metadata(info, &cancel)
//!         .await
//!         .with_context("while resolving video")?;
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::lookup::LookupError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog lookup error
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File not found
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a not found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound(path.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// True if the underlying cause is a cancelled lookup
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Lookup(LookupError::Cancelled) => true,
            Self::WithContext { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, LookupError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Lookup(e).context(ctx))
    }
}
