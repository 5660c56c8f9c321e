use crate::clock::ClockSource;
use crate::events::Events;
use crate::interface::{RewardVaultInterface, StakingRegistryInterface};
use crate::registry::{StakingRegistry, StakingTokenConfig};
use crate::storage::{get_clock_source, get_reward_token, set_clock_source, set_reward_token};
use crate::vault::RewardVault;
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::TransferableContract;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::require_admin;
use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct StakingDistributor;

#[contractimpl]
impl StakingDistributor {
    // Deploys the distributor.
    //
    // # Arguments
    //
    // * `admin` - Owner of the distributor.
    // * `reward_token` - Token distributed to stakers.
    // * `timer` - Timer contract to read time from. The ledger clock is used when absent.
    pub fn __constructor(e: Env, admin: Address, reward_token: Address, timer: Option<Address>) {
        AccessControl::new(&e).init_admin(&admin);
        set_reward_token(&e, &reward_token);
        set_clock_source(&e, &ClockSource::from_timer(timer));
    }

    pub fn owner(e: Env) -> Address {
        AccessControl::new(&e).get_admin()
    }

    // Current time as seen by the distributor.
    pub fn get_current_time(e: Env) -> u64 {
        get_clock_source(&e).now(&e)
    }

    pub fn clock_source(e: Env) -> ClockSource {
        get_clock_source(&e)
    }
}

#[contractimpl]
impl StakingRegistryInterface for StakingDistributor {
    // Registers `token` for staking or updates its settings.
    // Every call refreshes `last_update_time`; disabling keeps the token registered.
    //
    // # Arguments
    //
    // * `admin` - Owner of the distributor.
    // * `token` - Staking token address.
    // * `enabled` - Whether staking is active for the token.
    // * `base_emission_rate` - Reward units per second at multiplier 1.
    // * `max_multiplier` - Multiplier cap, 18-decimal fixed point.
    // * `seconds_to_max_multiplier` - Seconds of staking to reach the cap.
    fn enable_staking(
        e: Env,
        admin: Address,
        token: Address,
        enabled: bool,
        base_emission_rate: u128,
        max_multiplier: u128,
        seconds_to_max_multiplier: u64,
    ) {
        require_admin(&e, &admin);

        let now = get_clock_source(&e).now(&e);
        let config = StakingRegistry::new(&e).enable(
            &token,
            enabled,
            base_emission_rate,
            max_multiplier,
            seconds_to_max_multiplier,
            now,
        );
        Events::new(&e).enable_staking(token, config);
    }

    fn staking_tokens(e: Env, token: Address) -> StakingTokenConfig {
        StakingRegistry::new(&e).get_config(&token)
    }

    fn is_staking_token(e: Env, token: Address) -> bool {
        StakingRegistry::new(&e).is_enabled(&token)
    }
}

#[contractimpl]
impl RewardVaultInterface for StakingDistributor {
    // Sends `amount` of `token` held by the distributor to the owner.
    // Staking tokens can not be recovered.
    //
    // # Arguments
    //
    // * `admin` - Owner of the distributor, receives the tokens.
    // * `token` - Token to recover.
    // * `amount` - Amount to send.
    fn recover_token(e: Env, admin: Address, token: Address, amount: i128) {
        require_admin(&e, &admin);

        RewardVault::new(&e).recover(&token, amount, &admin);
        Events::new(&e).recover_token(token, admin, amount);
    }

    fn reward_token(e: Env) -> Address {
        get_reward_token(&e)
    }
}

// The `TransferableContract` trait provides the interface for transferring ownership of the contract.
#[contractimpl]
impl TransferableContract for StakingDistributor {
    // Commits an ownership transfer. It can be applied after the admin actions delay.
    //
    // # Arguments
    //
    // * `admin` - The address of the admin.
    // * `new_admin` - The address of the new admin.
    fn commit_transfer_ownership(e: Env, admin: Address, new_admin: Address) {
        require_admin(&e, &admin);
        AccessControl::new(&e).commit_transfer_ownership(&new_admin);
        AccessControlEvents::new(&e).commit_transfer_ownership(new_admin);
    }

    // Applies the committed ownership transfer.
    //
    // # Arguments
    //
    // * `admin` - The address of the admin.
    fn apply_transfer_ownership(e: Env, admin: Address) {
        require_admin(&e, &admin);
        let new_admin = AccessControl::new(&e).apply_transfer_ownership();
        AccessControlEvents::new(&e).apply_transfer_ownership(new_admin);
    }

    // Reverts the committed ownership transfer.
    //
    // # Arguments
    //
    // * `admin` - The address of the admin.
    fn revert_transfer_ownership(e: Env, admin: Address) {
        require_admin(&e, &admin);
        AccessControl::new(&e).revert_transfer_ownership();
        AccessControlEvents::new(&e).revert_transfer_ownership();
    }

    // Returns the pending owner if a transfer is committed, the current owner otherwise.
    fn get_future_address(e: Env) -> Address {
        let access_control = AccessControl::new(&e);
        match access_control.get_transfer_ownership_deadline() {
            0 => access_control.get_admin(),
            _ => access_control.get_future_address(),
        }
    }
}
