use crate::access::{AccessControl, AccessControlTrait};
use soroban_sdk::{Address, Env};

// caller auth first, then role
pub fn require_admin(e: &Env, address: &Address) {
    address.require_auth();
    AccessControl::new(e).assert_address_is_admin(address);
}
