use alive_registrar::FlowError;
use alive_wallet::Wallet;
use clap::Parser;
use eyre::{Result, WrapErr, bail};

use crate::opts::WalletOpts;

/// CLI arguments for `alive connect`.
#[derive(Debug, Parser)]
pub struct ConnectArgs {
    #[command(flatten)]
    wallet: WalletOpts,

    /// Print the connection as JSON.
    #[arg(long)]
    json: bool,
}

impl ConnectArgs {
    pub async fn run(self) -> Result<()> {
        let wallet = self.wallet.wallet()?;
        if !wallet.is_available() {
            bail!("{}", FlowError::NoWallet);
        }
        let connection =
            wallet.request_account().await.wrap_err(FlowError::ConnectionFailed)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&connection)?);
        } else {
            println!("{}", connection.address);
        }
        Ok(())
    }
}
