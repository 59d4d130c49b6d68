//! SSH host record type.

use crate::error::Error;
use std::cmp::Ordering;

/// One `Host` stanza from an SSH client config.
///
/// A stanza may declare several patterns (`Host web1 web1.internal`); the
/// first one is the primary alias and is used for sorting, filtering and
/// as the key in rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    aliases: Vec<String>,
    hostname: String,
    user: String,
}

impl Host {
    /// Creates a host record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAliases`] if `aliases` is empty.
    pub fn new(
        aliases: Vec<String>,
        hostname: impl Into<String>,
        user: impl Into<String>,
    ) -> Result<Self, Error> {
        if aliases.is_empty() {
            return Err(Error::NoAliases);
        }

        Ok(Self {
            aliases,
            hostname: hostname.into(),
            user: user.into(),
        })
    }

    /// The first declared pattern.
    #[must_use]
    pub fn primary_alias(&self) -> &str {
        // Non-empty, checked in `new`.
        &self.aliases[0]
    }

    /// All declared patterns, in declaration order.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The `HostName` value, empty if the stanza has none.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The `User` value, empty if the stanza has none.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }
}

/// Orders two hosts by byte-wise comparison of their primary aliases.
pub fn by_primary_alias(a: &Host, b: &Host) -> Ordering {
    a.primary_alias().as_bytes().cmp(b.primary_alias().as_bytes())
}
