//! CLI error types.

use roster_config::ConfigError;
use roster_fetch::FetchError;
use roster_model::ModelError;
use roster_views::ViewError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Load(#[from] FetchError),

    #[error("{0}")]
    View(#[from] ViewError),

    #[error("{0}")]
    Model(#[from] ModelError),
}
