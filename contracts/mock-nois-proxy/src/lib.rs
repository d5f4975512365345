#![allow(clippy::result_large_err)]

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

#[cfg(not(target_arch = "wasm32"))]
mod interface;
#[cfg(not(target_arch = "wasm32"))]
pub use crate::interface::MockNoisProxy;
