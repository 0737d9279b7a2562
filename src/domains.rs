//! Anonymous domain registration client and types.
//!
//! Wraps the `/api/domains` endpoints: availability checks, crypto
//! purchases, order polling, ownership listing and DNS management. Ownership
//! is capability-based: the `domainSecret` returned at purchase time is the
//! only credential, there is no account and no recovery.

mod client;
mod types;

pub use client::DomainClient;
pub use types::*;
