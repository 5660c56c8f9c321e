use crate::errors::AccessControlError;
use crate::storage::DataKey;
use soroban_sdk::{panic_with_error, Address, Env};
use utils::bump::bump_instance;

#[derive(Clone)]
pub struct AccessControl(pub(crate) Env);

impl AccessControl {
    pub fn new(env: &Env) -> AccessControl {
        AccessControl(env.clone())
    }
}

pub trait AccessControlTrait {
    fn get_admin_safe(&self) -> Option<Address>;
    fn get_admin(&self) -> Address;
    fn init_admin(&self, address: &Address);
    fn set_admin(&self, address: &Address);
    fn address_is_admin(&self, address: &Address) -> bool;
    fn assert_address_is_admin(&self, address: &Address);
}

impl AccessControlTrait for AccessControl {
    fn get_admin_safe(&self) -> Option<Address> {
        bump_instance(&self.0);
        self.0.storage().instance().get(&DataKey::Admin)
    }

    fn get_admin(&self) -> Address {
        match self.get_admin_safe() {
            Some(address) => address,
            None => panic_with_error!(&self.0, AccessControlError::RoleNotFound),
        }
    }

    // first assignment only. replacing the admin goes through `set_admin` or the delayed transfer
    fn init_admin(&self, address: &Address) {
        if self.get_admin_safe().is_some() {
            panic_with_error!(&self.0, AccessControlError::AdminAlreadySet);
        }
        self.set_admin(address);
    }

    fn set_admin(&self, address: &Address) {
        bump_instance(&self.0);
        self.0.storage().instance().set(&DataKey::Admin, address);
    }

    fn address_is_admin(&self, address: &Address) -> bool {
        match self.get_admin_safe() {
            Some(admin) => address == &admin,
            None => false,
        }
    }

    fn assert_address_is_admin(&self, address: &Address) {
        if !self.address_is_admin(address) {
            panic_with_error!(&self.0, AccessControlError::Unauthorized);
        }
    }
}
