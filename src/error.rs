use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for a listing run. Every variant is fatal.
#[derive(Error, Debug)]
pub enum Error {
    /// No `--config-file` was given and the home directory is unknown.
    #[error("could not determine home directory")]
    HomeDirUnresolvable,

    /// The SSH config could not be opened or parsed.
    #[error(transparent)]
    ConfigUnreadable(#[from] ssh::Error),

    /// Nothing left to list after filtering.
    #[error("no hosts found in {}", path.display())]
    NoHostsFound { path: PathBuf },

    /// JSON serialization failed.
    #[error("failed to render JSON: {0}")]
    Render(#[from] serde_json::Error),

    /// Writing the listing failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
