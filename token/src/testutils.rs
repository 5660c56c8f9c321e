#![cfg(any(test, feature = "testutils"))]

use crate::{Token, TokenClient};
use soroban_sdk::{Address, Env, String};

pub fn create_token<'a>(e: &Env, admin: &Address, symbol: &str, name: &str) -> TokenClient<'a> {
    TokenClient::new(
        e,
        &e.register(
            Token {},
            (
                admin.clone(),
                18_u32,
                String::from_str(e, name),
                String::from_str(e, symbol),
            ),
        ),
    )
}

#[cfg(test)]
pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    pub(crate) token: TokenClient<'a>,
}

#[cfg(test)]
impl Default for Setup<'_> {
    fn default() -> Self {
        use soroban_sdk::testutils::Address as _;

        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let token = create_token(&env, &admin, "RWD", "Reward Token");
        Setup { env, admin, token }
    }
}
