use clap::Parser;
use dotboy::{Cli, RunOptions};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    dotboy::run(RunOptions::from(cli))
}
