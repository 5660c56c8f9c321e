use soroban_sdk::{contractclient, contracttype, Address, Env};

#[contractclient(name = "TimeSourceClient")]
pub trait TimeSource {
    fn get_current_time(e: Env) -> u64;
}

// Where the distributor reads time from. Fixed at construction.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ClockSource {
    Ledger,
    Timer(Address),
}

impl ClockSource {
    pub fn from_timer(timer: Option<Address>) -> ClockSource {
        match timer {
            Some(address) => ClockSource::Timer(address),
            None => ClockSource::Ledger,
        }
    }

    pub fn now(&self, e: &Env) -> u64 {
        match self {
            ClockSource::Ledger => e.ledger().timestamp(),
            ClockSource::Timer(address) => TimeSourceClient::new(e, address).get_current_time(),
        }
    }
}
