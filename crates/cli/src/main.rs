//! Entry point for the command-line interface.
//! Argument handling and the actual commands live in dedicated modules.

use solscope::args::{parse_cli, Commands};
use solscope::commands::{print_cfg, print_inspect, print_references};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = parse_cli();
    match cli.command {
        Commands::Inspect(args) => print_inspect(args),
        Commands::Refs(args) => print_references(args),
        Commands::Cfg(args) => print_cfg(args),
    }
}
