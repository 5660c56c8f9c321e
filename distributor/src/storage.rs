use crate::clock::ClockSource;
use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_instance;
use utils::generate_instance_storage_getter_and_setter;
use utils::storage_errors::StorageError;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    RewardToken,
    Clock,
}

generate_instance_storage_getter_and_setter!(
    pub(crate) reward_token,
    DataKey::RewardToken,
    Address
);
generate_instance_storage_getter_and_setter!(
    pub(crate) clock_source,
    DataKey::Clock,
    ClockSource
);
