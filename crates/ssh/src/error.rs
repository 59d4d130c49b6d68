use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for SSH config reading.
#[derive(Error, Debug)]
pub enum Error {
    /// The config file could not be opened.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is malformed.
    #[error("failed to parse SSH config: {0}")]
    Parse(#[from] ssh2_config::SshParserError),
}
