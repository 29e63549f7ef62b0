use std::io;
use std::path::PathBuf;

use anyhow::{Result, bail};
use tracing::info;

use tabula_cli::{Session, SessionConfig};

const USAGE: &str = "usage: tabula [--replay] [--no-history] [HISTORY_FILE]";

fn parse_args(args: impl Iterator<Item = String>) -> Result<SessionConfig> {
    let mut config = SessionConfig::default();
    for arg in args {
        match arg.as_str() {
            "--replay" => config.replay = true,
            "--no-history" => config.history_path = None,
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with('-') => bail!("unknown option {flag}\n{USAGE}"),
            path => config.history_path = Some(PathBuf::from(path)),
        }
    }
    if config.replay && config.history_path.is_none() {
        bail!("--replay needs a history file\n{USAGE}");
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = parse_args(std::env::args().skip(1))?;
    info!(?config, "tabula starting");

    let mut session = Session::new(config)?;
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
