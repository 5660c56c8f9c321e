use soroban_sdk::contracttype;

#[derive(Clone)]
#[contracttype]
pub(crate) enum DataKey {
    Admin,       // owner - configure staking tokens, recover tokens
    FutureAdmin, // pending owner

    TransferOwnershipDeadline,
}
