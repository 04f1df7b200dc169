use apikey_config::cli::{self, Cli, Command};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Show(args) => cli::show::run(args),
        Command::Check => cli::check::run(),
    }
}
