use clap::Parser;
use eyre::Result;

mod args;
mod cmd;
mod opts;

use args::{Alive, AliveSubcommand};

fn main() -> Result<()> {
    subscriber();
    let args = Alive::parse();
    main_args(args)
}

#[tokio::main]
async fn main_args(args: Alive) -> Result<()> {
    match args.cmd {
        AliveSubcommand::Preview(cmd) => cmd.run(),
        AliveSubcommand::Connect(cmd) => cmd.run().await,
        AliveSubcommand::Register(cmd) => cmd.run().await,
    }
}

/// Initializes a tracing subscriber for logging.
fn subscriber() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
