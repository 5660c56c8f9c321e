use crate::registry::StakingTokenConfig;
use soroban_sdk::{Address, Env};

pub trait StakingRegistryInterface {
    // Register or update a staking token
    fn enable_staking(
        e: Env,
        admin: Address,
        token: Address,
        enabled: bool,
        base_emission_rate: u128,
        max_multiplier: u128,
        seconds_to_max_multiplier: u64,
    );

    // Settings of a staking token, default values if never registered
    fn staking_tokens(e: Env, token: Address) -> StakingTokenConfig;

    // Whether staking is currently enabled for the token
    fn is_staking_token(e: Env, token: Address) -> bool;
}

pub trait RewardVaultInterface {
    // Send tokens held by the distributor to the owner
    fn recover_token(e: Env, admin: Address, token: Address, amount: i128);

    // Token distributed as reward
    fn reward_token(e: Env) -> Address;
}
