#![no_std]

#[cfg(test)]
extern crate std;

pub mod constants;
mod errors;

mod builder;
mod config;
mod interest;

mod testutils;

pub use builder::ReserveConfigBuilder;
pub use config::{ReserveConfig, ReserveConfigParams};
pub use errors::ReserveError;
