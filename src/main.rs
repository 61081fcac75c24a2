use std::{io, process::ExitCode};

use clap::Parser;
use proptypes_meta::cli::{Arguments, ExitStatus};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive, e.g. `proptypes_meta=trace`.
const LOG_ENV: &str = "PTMETA_LOG";

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match proptypes_meta::cli::run_cli(args) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Log to stderr so stdout stays clean for `--json`.
fn init_logging(verbose: bool) {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) if verbose => EnvFilter::new("warn,proptypes_meta=debug"),
        Err(_) => EnvFilter::new("warn"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
