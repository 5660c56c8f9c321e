#![no_std]

mod allowance;
mod balance;
mod contract;
mod errors;
mod metadata;
mod test_permissions;
pub mod testutils;

pub use crate::contract::{Token, TokenClient};
pub use crate::errors::TokenError;
