use clap::{Parser, Subcommand};

use crate::cmd::{connect::ConnectArgs, preview::PreviewArgs, register::RegisterArgs};

/// Preview and register Alive On Base handles.
#[derive(Debug, Parser)]
#[command(name = "alive", version, about, long_about = None)]
pub struct Alive {
    #[command(subcommand)]
    pub cmd: AliveSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum AliveSubcommand {
    /// Sanitize a name and print the resulting handle preview.
    #[command(visible_alias = "p")]
    Preview(PreviewArgs),

    /// Connect the configured wallet and print its account address.
    Connect(ConnectArgs),

    /// Register a handle against the registry contract.
    #[command(visible_alias = "mint")]
    Register(RegisterArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Alive::command().debug_assert();
    }
}
