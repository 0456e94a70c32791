use clap::Parser;
use factdb_cli::GeobaseToLispCli;

fn main() -> anyhow::Result<()> {
    GeobaseToLispCli::parse().execute()
}
