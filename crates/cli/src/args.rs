//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "solscope",
    about = "Inspect the Solidity IR built from solc standard-JSON output",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ingest compiler output and print a summary of the IR.
    Inspect(InspectArgs),
    /// List every reference to a named declaration.
    Refs(RefsArgs),
    /// Export the control flow graph of a function or modifier.
    Cfg(CfgArgs),
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Standard-JSON output files, one per compilation unit.
    #[arg(required = true)]
    pub outputs: Vec<PathBuf>,
    /// Directory source unit names are resolved against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Also print the node tree of every source unit.
    #[arg(long)]
    pub tree: bool,
}

#[derive(Debug, Args)]
pub struct RefsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Declaration name to look up.
    #[arg(long)]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct CfgArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Function to export, as `Contract.function` or a free function
    /// name.
    #[arg(long)]
    pub function: String,
    /// Output format.
    #[arg(long, default_value = "dot")]
    pub format: CfgFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CfgFormat {
    Dot,
    Mermaid,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cfg_command_parses() {
        let cli = Cli::try_parse_from([
            "solscope", "cfg", "out.json", "--root", "src", "--function", "Vault.withdraw",
        ])
        .unwrap();
        match cli.command {
            Commands::Cfg(args) => {
                assert_eq!(args.function, "Vault.withdraw");
                assert_eq!(args.format, CfgFormat::Dot);
                assert_eq!(args.common.outputs.len(), 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
