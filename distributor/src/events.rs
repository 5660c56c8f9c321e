use crate::registry::StakingTokenConfig;
use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }

    pub fn enable_staking(&self, token: Address, config: StakingTokenConfig) {
        self.env().events().publish(
            (Symbol::new(self.env(), "enable_staking"), token),
            (
                config.enabled,
                config.base_emission_rate,
                config.max_multiplier,
                config.seconds_to_max_multiplier,
                config.last_update_time,
            ),
        )
    }

    pub fn recover_token(&self, token: Address, to: Address, amount: i128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "recover_token"), token),
            (to, amount),
        )
    }
}
