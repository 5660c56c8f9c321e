#![cfg(test)]

use crate::{StakingDistributor, StakingDistributorClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};
use soroban_timer_contract::testutils::create_timer;
use soroban_timer_contract::TimerClient;
use soroban_token_contract::testutils::create_token;
use soroban_token_contract::TokenClient;

const ONE: u128 = 1_000_000_000_000_000_000;

pub(crate) const BASE_EMISSION_RATE: u128 = ONE / 100;
pub(crate) const MAX_MULTIPLIER: u128 = 5 * ONE;
pub(crate) const SECONDS_TO_MAX_MULTIPLIER: u64 = 1_000_000;
pub(crate) const SEED_DISTRIBUTOR_AMOUNT: i128 = 100_000 * ONE as i128;

pub(crate) fn to_wei(amount: i128) -> i128 {
    amount * ONE as i128
}

pub(crate) fn create_distributor<'a>(
    e: &Env,
    admin: &Address,
    reward_token: &Address,
    timer: Option<Address>,
) -> StakingDistributorClient<'a> {
    StakingDistributorClient::new(
        e,
        &e.register(
            StakingDistributor {},
            (admin.clone(), reward_token.clone(), timer),
        ),
    )
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    pub(crate) timer: TimerClient<'a>,
    pub(crate) reward_token: TokenClient<'a>,
    pub(crate) distributor: StakingDistributorClient<'a>,
    pub(crate) lp_token1: TokenClient<'a>,
    pub(crate) lp_token2: TokenClient<'a>,
}

impl Default for Setup<'_> {
    // Timer, reward token, distributor on top of both and two LP tokens
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let timer = create_timer(&env);
        let reward_token = create_token(&env, &admin, "RWD", "Reward Token");
        let distributor = create_distributor(
            &env,
            &admin,
            &reward_token.address,
            Some(timer.address.clone()),
        );
        let lp_token1 = create_token(&env, &admin, "LP1", "LP Token 1");
        let lp_token2 = create_token(&env, &admin, "LP2", "LP Token 2");

        Setup {
            env,
            admin,
            timer,
            reward_token,
            distributor,
            lp_token1,
            lp_token2,
        }
    }
}

impl Setup<'_> {
    // Enables `lp_token` with the default settings and seeds the distributor with rewards.
    pub(crate) fn enable_token_for_staking(&self, lp_token: &TokenClient) {
        self.distributor.enable_staking(
            &self.admin,
            &lp_token.address,
            &true,
            &BASE_EMISSION_RATE,
            &MAX_MULTIPLIER,
            &SECONDS_TO_MAX_MULTIPLIER,
        );
        self.reward_token
            .mint(&self.distributor.address, &SEED_DISTRIBUTOR_AMOUNT);
    }
}
