#![cfg(test)]

use crate::testutils::Setup;
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{Address, IntoVal};

#[test]
fn test_mint_third_party_user() {
    let setup = Setup::default();
    let rando = Address::generate(&setup.env);
    let user = Address::generate(&setup.env);

    assert!(setup
        .token
        .mock_auths(&[MockAuth {
            address: &rando,
            invoke: &MockAuthInvoke {
                contract: &setup.token.address,
                fn_name: "mint",
                args: (&user, 1000_i128).into_val(&setup.env),
                sub_invokes: &[],
            },
        }])
        .try_mint(&user, &1000)
        .is_err());
    assert_eq!(setup.token.balance(&user), 0);
}

#[test]
fn test_set_admin() {
    let setup = Setup::default();
    let new_admin = Address::generate(&setup.env);
    let user = Address::generate(&setup.env);

    setup.token.set_admin(&new_admin);
    assert_eq!(setup.token.admin(), new_admin);

    // new admin is the one asked to authorize minting
    setup
        .token
        .mock_auths(&[MockAuth {
            address: &new_admin,
            invoke: &MockAuthInvoke {
                contract: &setup.token.address,
                fn_name: "mint",
                args: (&user, 1000_i128).into_val(&setup.env),
                sub_invokes: &[],
            },
        }])
        .mint(&user, &1000);
    assert_eq!(setup.token.balance(&user), 1000);
}

#[test]
fn test_set_admin_third_party_user() {
    let setup = Setup::default();
    let rando = Address::generate(&setup.env);

    assert!(setup
        .token
        .mock_auths(&[MockAuth {
            address: &rando,
            invoke: &MockAuthInvoke {
                contract: &setup.token.address,
                fn_name: "set_admin",
                args: (&rando,).into_val(&setup.env),
                sub_invokes: &[],
            },
        }])
        .try_set_admin(&rando)
        .is_err());
    assert_eq!(setup.token.admin(), setup.admin);
}
