use crate::Arguments;
use crate::error::Error;
use hosts::Hosts;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runs one listing: read the config, filter, sort, render to `out`.
///
/// Nothing is written unless at least one host survives filtering.
pub fn run(args: &Arguments, out: &mut impl Write) -> Result<(), Error> {
    let path = config_path(args.config_file.as_deref(), ssh::default_config_path())?;

    info!("reading SSH config from {}", path.display());
    let hosts = Hosts::from(ssh::load_hosts(&path)?);

    let listing = list(&hosts, &args.excludes);
    debug!(
        "{} of {} hosts left after excluding {:?}",
        listing.len(),
        hosts.len(),
        args.excludes
    );

    if listing.is_empty() {
        return Err(Error::NoHostsFound { path });
    }

    let rendered = if args.json {
        let mut json = listing.render_json(args.pretty)?;
        json.push('\n');
        json
    } else {
        listing.render_text()
    };

    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Picks the config file: an explicit path wins, otherwise `default`.
fn config_path(explicit: Option<&Path>, default: Option<PathBuf>) -> Result<PathBuf, Error> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default.ok_or(Error::HomeDirUnresolvable),
    }
}

/// Drops excluded primary aliases and sorts what is left.
fn list(hosts: &Hosts, excludes: &[String]) -> Hosts {
    let mut listing = hosts.filter(excludes);
    listing.sort_by_primary_alias();
    listing
}
