use alive_wallet::LocalWallet;
use alloy_signer_local::PrivateKeySigner;
use clap::Parser;
use eyre::Result;
use url::Url;

/// Wallet-side configuration shared by commands that reach the chain.
#[derive(Clone, Debug, Parser)]
pub struct WalletOpts {
    /// The RPC endpoint.
    #[arg(short = 'r', long, env = "ETH_RPC_URL", value_name = "URL")]
    pub rpc_url: Url,

    /// The signing key. When absent, the wallet reports unavailable and no
    /// network call is made.
    #[arg(long, env = "PRIVATE_KEY", value_name = "RAW_PRIVATE_KEY")]
    pub private_key: Option<String>,
}

impl WalletOpts {
    pub fn wallet(&self) -> Result<LocalWallet> {
        let signer = self
            .private_key
            .as_deref()
            .map(|key| key.trim_start_matches("0x").parse::<PrivateKeySigner>())
            .transpose()?;
        Ok(LocalWallet::new(self.rpc_url.clone(), signer))
    }
}
