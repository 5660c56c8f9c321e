use crate::access::{AccessControl, AccessControlTrait};
use crate::constants::ADMIN_ACTIONS_DELAY;
use crate::errors::AccessControlError;
use crate::storage::DataKey;
use soroban_sdk::{panic_with_error, Address};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;

pub trait TransferOwnershipTrait {
    fn get_transfer_ownership_deadline(&self) -> u64;
    fn put_transfer_ownership_deadline(&self, value: u64);
    fn get_future_address(&self) -> Address;
    fn commit_transfer_ownership(&self, future_address: &Address);
    fn apply_transfer_ownership(&self) -> Address;
    fn revert_transfer_ownership(&self);
}

impl TransferOwnershipTrait for AccessControl {
    fn get_transfer_ownership_deadline(&self) -> u64 {
        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .get(&DataKey::TransferOwnershipDeadline)
            .unwrap_or(0)
    }

    fn put_transfer_ownership_deadline(&self, value: u64) {
        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .set(&DataKey::TransferOwnershipDeadline, &value);
    }

    fn get_future_address(&self) -> Address {
        match self.0.storage().instance().get(&DataKey::FutureAdmin) {
            Some(v) => v,
            None => panic_with_error!(&self.0, AccessControlError::NoActionActive),
        }
    }

    fn commit_transfer_ownership(&self, future_address: &Address) {
        if self.get_transfer_ownership_deadline() != 0 {
            panic_with_error!(&self.0, AccessControlError::AnotherActionActive);
        }

        let deadline = self.0.ledger().timestamp() + ADMIN_ACTIONS_DELAY;
        self.put_transfer_ownership_deadline(deadline);

        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .set(&DataKey::FutureAdmin, future_address);
    }

    fn apply_transfer_ownership(&self) -> Address {
        let deadline = self.get_transfer_ownership_deadline();
        if deadline == 0 {
            panic_with_error!(&self.0, AccessControlError::NoActionActive);
        }
        if self.0.ledger().timestamp() < deadline {
            panic_with_error!(&self.0, AccessControlError::ActionNotReadyYet);
        }

        self.put_transfer_ownership_deadline(0);
        let future_address: Address = match self.0.storage().instance().get(&DataKey::FutureAdmin)
        {
            Some(v) => v,
            None => panic_with_error!(&self.0, StorageError::ValueNotInitialized),
        };
        self.0.storage().instance().remove(&DataKey::FutureAdmin);

        self.set_admin(&future_address);
        future_address
    }

    fn revert_transfer_ownership(&self) {
        self.put_transfer_ownership_deadline(0);
        self.0.storage().instance().remove(&DataKey::FutureAdmin);
    }
}
