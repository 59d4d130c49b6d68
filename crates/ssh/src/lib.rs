mod error;

pub use error::Error;

use hosts::Host;
use ssh2_config::{ParseRule, SshConfig};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Returns the default SSH config file path (~/.ssh/config).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh").join("config"))
}

/// Reads the SSH config at `path` and returns one record per `Host` stanza.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be opened and `Error::Parse` if it
/// is malformed.
pub fn load_hosts(path: &Path) -> Result<Vec<Host>, Error> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("parsing SSH config at {}", path.display());
    parse_hosts(&mut BufReader::new(file))
}

/// Parses SSH config text into host records, in declaration order.
///
/// Unknown directives are accepted. The parser's implicit `*` stanza is
/// returned like any other record.
///
/// # Errors
///
/// Returns `Error::Parse` if the config is malformed.
pub fn parse_hosts(reader: &mut impl BufRead) -> Result<Vec<Host>, Error> {
    let config = SshConfig::default().parse(reader, ParseRule::ALLOW_UNKNOWN_FIELDS)?;

    let mut hosts = Vec::new();

    for host in config.get_hosts() {
        let aliases: Vec<String> = host
            .pattern
            .iter()
            .map(|clause| {
                if clause.negated {
                    format!("!{}", clause.pattern)
                } else {
                    clause.pattern.clone()
                }
            })
            .collect();

        let hostname = host.params.host_name.clone().unwrap_or_default();
        let user = host.params.user.clone().unwrap_or_default();

        match Host::new(aliases, hostname, user) {
            Ok(record) => hosts.push(record),
            Err(e) => warn!("skipping SSH config stanza: {e}"),
        }
    }

    debug!("read {} host stanzas", hosts.len());
    Ok(hosts)
}
