use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DistributorError {
    ProtectedAsset = 301,
    InsufficientBalance = 302,
    InvalidAmount = 303,
}
