//! Anonymous gift-card client and types.
//!
//! Wraps the `/api/giftcards` endpoints: catalog browsing, crypto orders,
//! status polling and card retrieval. Retrieving the actual card secrets is
//! gated behind a group-membership proof; see
//! [`GiftCardClient::retrieve_cards`].

mod client;
mod types;

pub use client::GiftCardClient;
pub use types::*;
