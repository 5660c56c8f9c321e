#![cfg(any(test, feature = "testutils"))]

use crate::{Timer, TimerClient};
use soroban_sdk::Env;

pub fn create_timer<'a>(e: &Env) -> TimerClient<'a> {
    TimerClient::new(e, &e.register(Timer {}, ()))
}
