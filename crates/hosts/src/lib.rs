mod collection;
mod error;
mod host;

pub use collection::{DEFAULT_EXCLUDES, HostSummary, Hosts};
pub use error::Error;
pub use host::{Host, by_primary_alias};
