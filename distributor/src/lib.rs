#![no_std]

mod clock;
mod contract;
mod errors;
mod events;
mod interface;
mod registry;
mod storage;
mod vault;

mod test;
mod test_permissions;
mod testutils;

pub use crate::clock::ClockSource;
pub use crate::contract::{StakingDistributor, StakingDistributorArgs, StakingDistributorClient};
pub use crate::errors::DistributorError;
pub use crate::registry::StakingTokenConfig;
