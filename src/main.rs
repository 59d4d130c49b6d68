mod error;
mod logging;
mod sshls;

use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const VERSION: &str = concat!(env!("SSHLS_VERSION"), " ", env!("SSHLS_BUILD_HASH"));

#[derive(Parser, Debug)]
#[command(name = "sshls", version = VERSION, about = "List the hosts in your SSH config")]
struct Arguments {
    /// Print hosts as a JSON object
    #[arg(short, long)]
    json: bool,

    /// Indent JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// SSH config file to read [default: ~/.ssh/config]
    #[arg(
        short = 'c',
        long,
        visible_alias = "configFile",
        env = "SSHLS_CONFIG",
        value_name = "PATH"
    )]
    config_file: Option<PathBuf>,

    /// Primary alias to leave out of the listing (repeatable)
    #[arg(long = "exclude", value_name = "ALIAS", default_value = "*")]
    excludes: Vec<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    logging::init_logging(args.verbose);

    match sshls::run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
