use soroban_sdk::Env;

pub trait TimeSourceInterface {
    // Current time in seconds
    fn get_current_time(e: Env) -> u64;
}
