use crate::errors::DistributorError;
use crate::registry::StakingRegistry;
use soroban_sdk::{panic_with_error, token, Address, Env};

#[derive(Clone)]
pub struct RewardVault(Env);

impl RewardVault {
    #[inline(always)]
    pub fn new(e: &Env) -> RewardVault {
        RewardVault(e.clone())
    }

    pub fn balance(&self, token: &Address) -> i128 {
        token::Client::new(&self.0, token).balance(&self.0.current_contract_address())
    }

    // Sends `amount` of `token` held by the distributor to `to`.
    // Registered staking tokens are never released, whatever their enabled flag.
    pub fn recover(&self, token: &Address, amount: i128, to: &Address) {
        if StakingRegistry::new(&self.0).is_registered(token) {
            panic_with_error!(&self.0, DistributorError::ProtectedAsset);
        }
        if amount < 0 {
            panic_with_error!(&self.0, DistributorError::InvalidAmount);
        }
        if self.balance(token) < amount {
            panic_with_error!(&self.0, DistributorError::InsufficientBalance);
        }

        token::Client::new(&self.0, token).transfer(
            &self.0.current_contract_address(),
            to,
            &amount,
        );
    }
}
