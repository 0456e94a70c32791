use clap::Parser;
use factdb_cli::FactdbCli;

fn main() -> anyhow::Result<()> {
    FactdbCli::parse().execute()
}
