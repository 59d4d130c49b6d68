use thiserror::Error;

/// Error type for host record construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A host record needs at least one alias to be listed.
    #[error("host record has no aliases")]
    NoAliases,
}
