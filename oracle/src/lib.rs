#![no_std]

#[cfg(test)]
extern crate std;

pub mod constants;

mod price;
mod pyth;
mod switchboard;

pub use price::{Rejection, Spot};
pub use pyth::{extract_pyth_price, PythFeed, PythPrice, PythQuote};
pub use switchboard::{
    extract_switchboard_price, AggregatorResult, SwitchboardFeed, SwitchboardQuote,
};
