//! Domain-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToggleError {
    #[error("missing renderer flag")]
    MissingRenderer,
    #[error("unknown renderer flag '{0}'")]
    UnknownRenderer(String),
    #[error("{source:#}")]
    Download {
        url: String,
        #[source]
        source: anyhow::Error,
    },
}
