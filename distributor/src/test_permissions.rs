#![cfg(test)]

use crate::testutils::{to_wei, Setup};
use crate::StakingTokenConfig;
use access_control::constants::ADMIN_ACTIONS_DELAY;
use access_control::errors::AccessControlError;
use soroban_sdk::testutils::{Address as _, Events, MockAuth, MockAuthInvoke};
use soroban_sdk::{vec, Address, IntoVal, Symbol};
use utils::test_utils::jump;

#[test]
fn test_non_owner_cant_enable_staking() {
    let setup = Setup::default();
    let rando = Address::generate(&setup.env);

    assert_eq!(
        setup.distributor.try_enable_staking(
            &rando,
            &setup.lp_token1.address,
            &true,
            &4,
            &2,
            &0
        ),
        Err(Ok(AccessControlError::Unauthorized.into()))
    );
    assert_eq!(
        setup.distributor.staking_tokens(&setup.lp_token1.address),
        StakingTokenConfig::default()
    );
}

#[test]
fn test_non_owner_cant_update_staking_token() {
    let setup = Setup::default();
    let rando = Address::generate(&setup.env);
    setup.enable_token_for_staking(&setup.lp_token1);
    let config = setup.distributor.staking_tokens(&setup.lp_token1.address);

    setup.timer.advance(&100);
    assert!(setup
        .distributor
        .try_enable_staking(&rando, &setup.lp_token1.address, &false, &0, &0, &0)
        .is_err());
    assert_eq!(
        setup.distributor.staking_tokens(&setup.lp_token1.address),
        config
    );
}

#[test]
fn test_non_owner_cant_recover_tokens() {
    let setup = Setup::default();
    let rando = Address::generate(&setup.env);
    setup
        .reward_token
        .mint(&setup.distributor.address, &to_wei(420));

    assert_eq!(
        setup.distributor.try_recover_token(
            &rando,
            &setup.reward_token.address,
            &to_wei(420)
        ),
        Err(Ok(AccessControlError::Unauthorized.into()))
    );
    assert_eq!(
        setup.reward_token.balance(&setup.distributor.address),
        to_wei(420)
    );
    assert_eq!(setup.reward_token.balance(&rando), 0);
}

#[test]
fn test_owner_address_without_signature() {
    let setup = Setup::default();
    let rando = Address::generate(&setup.env);

    // rando signs, admin address is passed
    assert!(setup
        .distributor
        .mock_auths(&[MockAuth {
            address: &rando,
            invoke: &MockAuthInvoke {
                contract: &setup.distributor.address,
                fn_name: "enable_staking",
                args: (
                    &setup.admin,
                    &setup.lp_token1.address,
                    true,
                    4_u128,
                    2_u128,
                    0_u64
                )
                    .into_val(&setup.env),
                sub_invokes: &[],
            },
        }])
        .try_enable_staking(
            &setup.admin,
            &setup.lp_token1.address,
            &true,
            &4,
            &2,
            &0
        )
        .is_err());
    assert!(!setup
        .distributor
        .is_staking_token(&setup.lp_token1.address));
}

// test transfer ownership
#[test]
#[should_panic(expected = "Error(Contract, #2908)")]
fn test_transfer_ownership_too_early() {
    let setup = Setup::default();
    let distributor = setup.distributor;
    let admin_original = setup.admin;
    let admin_new = Address::generate(&setup.env);

    distributor.commit_transfer_ownership(&admin_original, &admin_new);
    // check admin not changed yet by calling protected method
    assert!(distributor
        .try_revert_transfer_ownership(&admin_new)
        .is_err());
    jump(&setup.env, ADMIN_ACTIONS_DELAY - 1);
    distributor.apply_transfer_ownership(&admin_original);
}

#[test]
#[should_panic(expected = "Error(Contract, #2906)")]
fn test_transfer_ownership_twice() {
    let setup = Setup::default();
    let distributor = setup.distributor;
    let admin_original = setup.admin;
    let admin_new = Address::generate(&setup.env);

    distributor.commit_transfer_ownership(&admin_original, &admin_new);
    distributor.commit_transfer_ownership(&admin_original, &admin_new);
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_transfer_ownership_not_committed() {
    let setup = Setup::default();
    let distributor = setup.distributor;

    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    distributor.apply_transfer_ownership(&setup.admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #2907)")]
fn test_transfer_ownership_reverted() {
    let setup = Setup::default();
    let distributor = setup.distributor;
    let admin_original = setup.admin;
    let admin_new = Address::generate(&setup.env);

    distributor.commit_transfer_ownership(&admin_original, &admin_new);
    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    distributor.revert_transfer_ownership(&admin_original);
    distributor.apply_transfer_ownership(&admin_original);
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let distributor = setup.distributor;
    let admin_original = setup.admin;
    let admin_new = Address::generate(&setup.env);

    assert_eq!(distributor.get_future_address(), admin_original);
    distributor.commit_transfer_ownership(&admin_original, &admin_new);
    assert_eq!(distributor.get_future_address(), admin_new);
    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    distributor.apply_transfer_ownership(&admin_original);
    assert_eq!(distributor.owner(), admin_new);

    // powers moved with the ownership
    assert!(distributor
        .try_enable_staking(&admin_original, &setup.lp_token1.address, &true, &4, &2, &0)
        .is_err());
    distributor.enable_staking(&admin_new, &setup.lp_token1.address, &true, &4, &2, &0);
    assert!(distributor.is_staking_token(&setup.lp_token1.address));
}

#[test]
fn test_transfer_ownership_events() {
    let setup = Setup::default();
    let distributor = setup.distributor;
    let new_admin = Address::generate(&setup.env);

    distributor.commit_transfer_ownership(&setup.admin, &new_admin);
    assert_eq!(
        vec![&setup.env, setup.env.events().all().last().unwrap()],
        vec![
            &setup.env,
            (
                distributor.address.clone(),
                (Symbol::new(&setup.env, "commit_transfer_ownership"),).into_val(&setup.env),
                (new_admin.clone(),).into_val(&setup.env),
            ),
        ]
    );

    distributor.revert_transfer_ownership(&setup.admin);
    assert_eq!(
        vec![&setup.env, setup.env.events().all().last().unwrap()],
        vec![
            &setup.env,
            (
                distributor.address.clone(),
                (Symbol::new(&setup.env, "revert_transfer_ownership"),).into_val(&setup.env),
                ().into_val(&setup.env),
            ),
        ]
    );

    distributor.commit_transfer_ownership(&setup.admin, &new_admin);
    jump(&setup.env, ADMIN_ACTIONS_DELAY + 1);
    distributor.apply_transfer_ownership(&setup.admin);
    assert_eq!(
        vec![&setup.env, setup.env.events().all().last().unwrap()],
        vec![
            &setup.env,
            (
                distributor.address.clone(),
                (Symbol::new(&setup.env, "apply_transfer_ownership"),).into_val(&setup.env),
                (new_admin.clone(),).into_val(&setup.env),
            ),
        ]
    );
}
