use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = astroprofile::cli::Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = astroprofile::run(cli) {
        tracing::debug!(?err, "command failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

// RUST_LOG wins over -v.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
