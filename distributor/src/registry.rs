use soroban_sdk::{contracttype, Address, Env};
use utils::bump::bump_persistent;

// Per staking token settings. `max_multiplier` is an 18-decimal fixed point value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct StakingTokenConfig {
    pub enabled: bool,
    pub base_emission_rate: u128,
    pub max_multiplier: u128,
    pub seconds_to_max_multiplier: u64,
    pub last_update_time: u64,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    StakingToken(Address),
}

#[derive(Clone)]
pub struct StakingRegistry(Env);

impl StakingRegistry {
    #[inline(always)]
    pub fn new(e: &Env) -> StakingRegistry {
        StakingRegistry(e.clone())
    }

    pub fn get_config_safe(&self, token: &Address) -> Option<StakingTokenConfig> {
        let key = DataKey::StakingToken(token.clone());
        let config = self.0.storage().persistent().get(&key);
        if config.is_some() {
            bump_persistent(&self.0, &key);
        }
        config
    }

    // unregistered tokens read as disabled with zeroed settings
    pub fn get_config(&self, token: &Address) -> StakingTokenConfig {
        self.get_config_safe(token).unwrap_or_default()
    }

    // a token stays registered after being disabled
    pub fn is_registered(&self, token: &Address) -> bool {
        let key = DataKey::StakingToken(token.clone());
        let registered = self.0.storage().persistent().has(&key);
        if registered {
            bump_persistent(&self.0, &key);
        }
        registered
    }

    pub fn is_enabled(&self, token: &Address) -> bool {
        self.get_config(token).enabled
    }

    // Inserts or overwrites the settings for `token`, stamping them with `now`.
    // The stored update time never moves backwards.
    pub fn enable(
        &self,
        token: &Address,
        enabled: bool,
        base_emission_rate: u128,
        max_multiplier: u128,
        seconds_to_max_multiplier: u64,
        now: u64,
    ) -> StakingTokenConfig {
        let last_update_time = match self.get_config_safe(token) {
            Some(previous) => previous.last_update_time.max(now),
            None => now,
        };

        let config = StakingTokenConfig {
            enabled,
            base_emission_rate,
            max_multiplier,
            seconds_to_max_multiplier,
            last_update_time,
        };

        let key = DataKey::StakingToken(token.clone());
        self.0.storage().persistent().set(&key, &config);
        bump_persistent(&self.0, &key);
        config
    }
}
