//! Crypto-to-crypto swap client and types.
//!
//! Wraps the `/api/swap` endpoints: currency listing, estimates, pair
//! ranges, order creation and status polling.

mod client;
mod types;

pub use client::SwapClient;
pub use types::*;
