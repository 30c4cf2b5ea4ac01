use alive_registrar::{AttemptStatus, Registrar, RegistrarConfig};
use alloy_primitives::{Address, TxHash};
use clap::Parser;
use eyre::{Result, eyre};
use serde::Serialize;
use url::Url;

use crate::opts::WalletOpts;

/// CLI arguments for `alive register`.
#[derive(Debug, Parser)]
pub struct RegisterArgs {
    /// The raw name to register; sanitized before submission.
    name: String,

    /// Address of the deployed registry contract.
    #[arg(long, env = "ALIVE_CONTRACT", value_name = "ADDRESS")]
    contract: Address,

    #[command(flatten)]
    wallet: WalletOpts,

    /// Produce a shareable referral link on success.
    #[arg(long)]
    referral: bool,

    /// Print the registration report as JSON.
    #[arg(long)]
    json: bool,
}

/// Report of a confirmed registration.
#[derive(Debug, Serialize)]
struct RegistrationReport {
    name: String,
    account: Option<Address>,
    tx_hash: Option<TxHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    referral: Option<Url>,
}

impl RegisterArgs {
    pub async fn run(self) -> Result<()> {
        let config = RegistrarConfig::new(self.contract)?.with_referral(self.referral);
        let wallet = self.wallet.wallet()?;
        let mut registrar = Registrar::new(config, wallet);

        registrar.set_name(&self.name);
        registrar.mint().await;

        match registrar.status() {
            AttemptStatus::Succeeded => {
                let report = RegistrationReport {
                    name: registrar.preview_text(),
                    account: registrar.account(),
                    tx_hash: registrar.attempt().and_then(|attempt| attempt.tx_hash),
                    referral: registrar.referral_link().cloned(),
                };
                if self.json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    println!("Success: {} registered.", report.name);
                    if let Some(hash) = report.tx_hash {
                        println!("Transaction: {hash:#x}");
                    }
                    if let Some(referral) = &report.referral {
                        println!("Share: {referral}");
                    }
                }
                Ok(())
            }
            AttemptStatus::Failed(err) => Err(eyre!(*err)),
            status => Err(eyre!("registration ended in unexpected state: {status:?}")),
        }
    }
}
