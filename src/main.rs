use clap::Parser;
use console::{style, Term};
use tracing_subscriber::EnvFilter;

use vapi_cli::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let mut term = Term::stdout();
    if let Err(err) = cli::run(cli, &mut term) {
        eprintln!("{} {:#}", style("error:").for_stderr().red().bold(), err);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout only carries command output. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
