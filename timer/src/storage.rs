use paste::paste;
use soroban_sdk::{contracttype, Env};
use utils::bump::bump_instance;
use utils::generate_instance_storage_getter_and_setter_with_default;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    CurrentTime,
}

generate_instance_storage_getter_and_setter_with_default!(
    pub(crate) time,
    DataKey::CurrentTime,
    u64,
    0
);
