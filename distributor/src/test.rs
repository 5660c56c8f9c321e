#![cfg(test)]
extern crate std;

use crate::testutils::{
    create_distributor, to_wei, Setup, BASE_EMISSION_RATE, MAX_MULTIPLIER,
    SECONDS_TO_MAX_MULTIPLIER, SEED_DISTRIBUTOR_AMOUNT,
};
use crate::{ClockSource, DistributorError, StakingTokenConfig};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};
use soroban_token_contract::testutils::create_token;
use utils::test_utils::jump;

#[test]
fn test_enable_token_for_staking() {
    let setup = Setup::default();
    let distributor = setup.distributor;
    let lp_token = setup.lp_token1.address;

    assert!(!distributor.staking_tokens(&lp_token).enabled);
    assert!(!distributor.is_staking_token(&lp_token));

    setup.timer.set_current_time(&1_000);
    distributor.enable_staking(
        &setup.admin,
        &lp_token,
        &true,
        &BASE_EMISSION_RATE,
        &MAX_MULTIPLIER,
        &SECONDS_TO_MAX_MULTIPLIER,
    );
    let config = distributor.staking_tokens(&lp_token);
    assert!(config.enabled);
    assert_eq!(config.base_emission_rate, BASE_EMISSION_RATE);
    assert_eq!(config.max_multiplier, MAX_MULTIPLIER);
    assert_eq!(config.seconds_to_max_multiplier, SECONDS_TO_MAX_MULTIPLIER);
    assert_eq!(config.last_update_time, setup.timer.get_current_time());
    assert!(distributor.is_staking_token(&lp_token));

    // update settings
    let new_multiplier = MAX_MULTIPLIER + to_wei(1) as u128;
    distributor.enable_staking(
        &setup.admin,
        &lp_token,
        &true,
        &BASE_EMISSION_RATE,
        &new_multiplier,
        &SECONDS_TO_MAX_MULTIPLIER,
    );
    let config = distributor.staking_tokens(&lp_token);
    assert_eq!(config.max_multiplier, new_multiplier);
    assert_eq!(config.base_emission_rate, BASE_EMISSION_RATE);
    assert_eq!(config.seconds_to_max_multiplier, SECONDS_TO_MAX_MULTIPLIER);

    // disable token for staking
    distributor.enable_staking(
        &setup.admin,
        &lp_token,
        &false,
        &BASE_EMISSION_RATE,
        &new_multiplier,
        &SECONDS_TO_MAX_MULTIPLIER,
    );
    let config = distributor.staking_tokens(&lp_token);
    assert!(!config.enabled);
    assert_eq!(config.max_multiplier, new_multiplier);
    assert!(!distributor.is_staking_token(&lp_token));
}

#[test]
fn test_enable_then_disable_keeps_settings() {
    let setup = Setup::default();
    let distributor = setup.distributor;
    let lp_token = setup.lp_token1.address;

    distributor.enable_staking(&setup.admin, &lp_token, &true, &4, &2, &0);
    assert_eq!(
        distributor.staking_tokens(&lp_token),
        StakingTokenConfig {
            enabled: true,
            base_emission_rate: 4,
            max_multiplier: 2,
            seconds_to_max_multiplier: 0,
            last_update_time: setup.timer.get_current_time(),
        }
    );

    distributor.enable_staking(&setup.admin, &lp_token, &false, &4, &2, &0);
    assert_eq!(
        distributor.staking_tokens(&lp_token),
        StakingTokenConfig {
            enabled: false,
            base_emission_rate: 4,
            max_multiplier: 2,
            seconds_to_max_multiplier: 0,
            last_update_time: setup.timer.get_current_time(),
        }
    );
}

#[test]
fn test_unregistered_token_reads_default() {
    let setup = Setup::default();
    let unknown = Address::generate(&setup.env);

    assert_eq!(
        setup.distributor.staking_tokens(&unknown),
        StakingTokenConfig::default()
    );
    // only the addressed token is touched
    setup.enable_token_for_staking(&setup.lp_token1);
    assert_eq!(
        setup.distributor.staking_tokens(&setup.lp_token2.address),
        StakingTokenConfig::default()
    );
}

#[test]
fn test_last_update_time_follows_timer() {
    let setup = Setup::default();
    let distributor = setup.distributor;
    let lp_token = setup.lp_token1.address;

    setup.timer.set_current_time(&500);
    distributor.enable_staking(&setup.admin, &lp_token, &true, &4, &2, &0);
    assert_eq!(distributor.staking_tokens(&lp_token).last_update_time, 500);

    // ledger time is not used when a timer is configured
    jump(&setup.env, 10_000);
    distributor.enable_staking(&setup.admin, &lp_token, &true, &4, &3, &0);
    assert_eq!(distributor.staking_tokens(&lp_token).last_update_time, 500);

    setup.timer.advance(&250);
    distributor.enable_staking(&setup.admin, &lp_token, &true, &4, &3, &0);
    assert_eq!(distributor.staking_tokens(&lp_token).last_update_time, 750);
    assert_eq!(distributor.get_current_time(), 750);
}

#[test]
fn test_ledger_clock_source() {
    let e = Env::default();
    e.mock_all_auths();
    e.ledger().set_timestamp(1_000);

    let admin = Address::generate(&e);
    let reward_token = create_token(&e, &admin, "RWD", "Reward Token");
    let lp_token = create_token(&e, &admin, "LP1", "LP Token 1");
    let distributor = create_distributor(&e, &admin, &reward_token.address, None);

    assert_eq!(distributor.clock_source(), ClockSource::Ledger);
    assert_eq!(distributor.get_current_time(), 1_000);

    distributor.enable_staking(&admin, &lp_token.address, &true, &4, &2, &0);
    assert_eq!(
        distributor.staking_tokens(&lp_token.address).last_update_time,
        1_000
    );

    jump(&e, 60);
    distributor.enable_staking(&admin, &lp_token.address, &true, &4, &2, &0);
    assert_eq!(
        distributor.staking_tokens(&lp_token.address).last_update_time,
        1_060
    );
}

#[test]
fn test_getters() {
    let setup = Setup::default();
    assert_eq!(setup.distributor.owner(), setup.admin);
    assert_eq!(
        setup.distributor.reward_token(),
        setup.reward_token.address
    );
    assert_eq!(
        setup.distributor.clock_source(),
        ClockSource::Timer(setup.timer.address.clone())
    );
}

#[test]
fn test_fixture_seeds_rewards() {
    let setup = Setup::default();
    setup.enable_token_for_staking(&setup.lp_token1);

    assert!(setup.distributor.is_staking_token(&setup.lp_token1.address));
    assert_eq!(
        setup.reward_token.balance(&setup.distributor.address),
        SEED_DISTRIBUTOR_AMOUNT
    );
}

#[test]
fn test_recover_tokens() {
    let setup = Setup::default();
    let distributor = setup.distributor;
    let reward_token = setup.reward_token;

    // drop tokens onto the contract. check they can be recovered by admin
    reward_token.mint(&distributor.address, &to_wei(420));
    assert_eq!(reward_token.balance(&distributor.address), to_wei(420));

    distributor.recover_token(&setup.admin, &reward_token.address, &to_wei(420));
    assert_eq!(reward_token.balance(&distributor.address), 0);
    assert_eq!(reward_token.balance(&setup.admin), to_wei(420));
}

#[test]
fn test_recover_partial_amount() {
    let setup = Setup::default();
    let stray = setup.lp_token2;
    stray.mint(&setup.distributor.address, &100);

    setup.distributor.recover_token(&setup.admin, &stray.address, &40);
    assert_eq!(stray.balance(&setup.distributor.address), 60);
    assert_eq!(stray.balance(&setup.admin), 40);
}

#[test]
#[should_panic(expected = "Error(Contract, #301)")]
fn test_can_not_recover_staking_tokens() {
    let setup = Setup::default();
    setup.distributor.enable_staking(
        &setup.admin,
        &setup.lp_token1.address,
        &true,
        &BASE_EMISSION_RATE,
        &MAX_MULTIPLIER,
        &SECONDS_TO_MAX_MULTIPLIER,
    );
    setup
        .lp_token1
        .mint(&setup.distributor.address, &to_wei(420));

    setup
        .distributor
        .recover_token(&setup.admin, &setup.lp_token1.address, &to_wei(420));
}

#[test]
fn test_can_not_recover_disabled_staking_tokens() {
    let setup = Setup::default();
    let lp_token = setup.lp_token1;

    setup
        .distributor
        .enable_staking(&setup.admin, &lp_token.address, &true, &4, &2, &0);
    setup
        .distributor
        .enable_staking(&setup.admin, &lp_token.address, &false, &4, &2, &0);
    lp_token.mint(&setup.distributor.address, &to_wei(420));

    for amount in [-1, 0, 1, to_wei(420)] {
        assert_eq!(
            setup
                .distributor
                .try_recover_token(&setup.admin, &lp_token.address, &amount),
            Err(Ok(DistributorError::ProtectedAsset.into()))
        );
    }
    assert_eq!(lp_token.balance(&setup.distributor.address), to_wei(420));
}

#[test]
#[should_panic(expected = "Error(Contract, #302)")]
fn test_recover_more_than_balance() {
    let setup = Setup::default();
    setup
        .reward_token
        .mint(&setup.distributor.address, &to_wei(420));

    setup.distributor.recover_token(
        &setup.admin,
        &setup.reward_token.address,
        &(to_wei(420) + 1),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #303)")]
fn test_recover_negative_amount() {
    let setup = Setup::default();
    setup
        .distributor
        .recover_token(&setup.admin, &setup.reward_token.address, &-1);
}

#[test]
fn test_enable_staking_event() {
    let setup = Setup::default();
    let e = &setup.env;
    let lp_token = setup.lp_token1.address.clone();

    setup.timer.set_current_time(&42);
    setup
        .distributor
        .enable_staking(&setup.admin, &lp_token, &true, &4, &2, &7);
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                setup.distributor.address.clone(),
                (Symbol::new(e, "enable_staking"), lp_token.clone()).into_val(e),
                (true, 4_u128, 2_u128, 7_u64, 42_u64).into_val(e),
            ),
        ]
    );
}

#[test]
fn test_recover_token_event() {
    let setup = Setup::default();
    let e = &setup.env;
    setup.reward_token.mint(&setup.distributor.address, &10);

    setup
        .distributor
        .recover_token(&setup.admin, &setup.reward_token.address, &10);
    assert_eq!(
        vec![e, e.events().all().last().unwrap()],
        vec![
            e,
            (
                setup.distributor.address.clone(),
                (
                    Symbol::new(e, "recover_token"),
                    setup.reward_token.address.clone()
                )
                    .into_val(e),
                (setup.admin.clone(), 10_i128).into_val(e),
            ),
        ]
    );
}
