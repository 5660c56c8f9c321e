#![no_std]

mod contract;
mod errors;
mod events;
pub mod interface;
mod storage;
pub mod testutils;

pub use crate::contract::{Timer, TimerClient};
pub use crate::errors::TimerError;
