use crate::errors::TimerError;
use crate::events::Events;
use crate::interface::TimeSourceInterface;
use crate::storage::{get_time, set_time};
use soroban_sdk::{contract, contractimpl, panic_with_error, Env};

#[contract]
pub struct Timer;

#[contractimpl]
impl Timer {
    // Starts the timer at the current ledger time.
    pub fn __constructor(e: Env) {
        set_time(&e, &e.ledger().timestamp());
    }

    // Moves the timer to `time`. The timer never goes backwards.
    //
    // # Arguments
    //
    // * `time` - New current time, in seconds.
    pub fn set_current_time(e: Env, time: u64) {
        if time < get_time(&e) {
            panic_with_error!(&e, TimerError::PastTimeNotAllowed);
        }
        set_time(&e, &time);
        Events::new(&e).set_current_time(time);
    }

    // Moves the timer forward by `seconds` and returns the new time.
    pub fn advance(e: Env, seconds: u64) -> u64 {
        let time = get_time(&e).saturating_add(seconds);
        set_time(&e, &time);
        Events::new(&e).set_current_time(time);
        time
    }
}

#[contractimpl]
impl TimeSourceInterface for Timer {
    fn get_current_time(e: Env) -> u64 {
        get_time(&e)
    }
}
