//! Startup configuration of the registration flow.

use alloy_primitives::{Address, U256};
use url::Url;

use crate::error::ConfigError;

/// Fixed registration fee: 0.0001 of the chain's native unit, in wei.
pub const REGISTRATION_FEE_WEI: U256 = U256::from_limbs([100_000_000_000_000, 0, 0, 0]);

/// Default base for referral links.
pub const DEFAULT_REFERRAL_BASE: &str = "https://aliveonbase.vercel.app/";

/// Configuration required before any registration can be attempted.
///
/// The registry contract address is a hard external dependency; construction
/// against an unset (zero) address fails instead of letting the flow submit
/// to an invalid target.
#[derive(Debug, Clone)]
pub struct RegistrarConfig {
    /// Address of the deployed registry contract.
    pub contract: Address,
    /// Fee attached to every registration.
    pub fee_wei: U256,
    /// Whether a referral link is produced on success.
    pub referral: bool,
    /// Base URL referral links are derived from.
    pub referral_base: Url,
}

impl RegistrarConfig {
    pub fn new(contract: Address) -> Result<Self, ConfigError> {
        if contract.is_zero() {
            return Err(ConfigError::UnsetContract);
        }
        Ok(Self {
            contract,
            fee_wei: REGISTRATION_FEE_WEI,
            referral: false,
            referral_base: Url::parse(DEFAULT_REFERRAL_BASE).expect("valid default referral base"),
        })
    }

    /// Enables or disables the referral artifact on success.
    pub fn with_referral(mut self, referral: bool) -> Self {
        self.referral = referral;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn zero_contract_address_fails_fast() {
        assert!(matches!(
            RegistrarConfig::new(Address::ZERO),
            Err(ConfigError::UnsetContract)
        ));
    }

    #[test]
    fn defaults() {
        let config =
            RegistrarConfig::new(address!("0x00000000000000000000000000000000000000a1")).unwrap();
        assert_eq!(config.fee_wei, U256::from(100_000_000_000_000u64));
        assert!(!config.referral);
        assert_eq!(config.referral_base.as_str(), DEFAULT_REFERRAL_BASE);
    }
}
