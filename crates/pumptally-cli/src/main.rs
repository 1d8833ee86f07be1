use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Reads a pump-history export (a JSON array of event objects) from stdin
/// and prints aggregate insulin statistics, one accumulator per line.
/// There are no flags; diagnostics go to stderr via `RUST_LOG`.
#[derive(Parser)]
#[command(
    name = "pumptally",
    version,
    about = "Summarize an insulin pump history export from stdin"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = std::io::read_to_string(std::io::stdin().lock())?;
    let events = pumptally_core::parse_history(&input)?;
    let summary = pumptally_core::aggregate(&events)?;
    print!("{summary}");

    Ok(())
}
