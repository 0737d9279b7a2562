//! Zekta Client SDK - Core Library
//!
//! Typed async wrappers around the Zekta anonymity service: anonymous domain
//! registration, gift-card purchasing, crypto-to-crypto swaps and
//! zero-knowledge-authenticated anonymous posting.
//!
//! Every call is a single stateless HTTPS round trip with JSON bodies; the
//! SDK holds no session or order state. Ownership credentials (domain and
//! gift-card secrets, session tokens) are returned to the caller, who is
//! responsible for retaining them — there are no accounts and no recovery.
//!
//! Proof-gated endpoints (gift-card retrieval, posting sessions) go through
//! the [`zk::ProofSystem`] trait, so the membership-proof backend can be
//! swapped without touching client call sites.
//!
//! # Example
//!
//! ```rust,ignore
//! use zekta_core::Client;
//!
//! let client = Client::new("https://zekta.io");
//!
//! // Check and buy a domain anonymously.
//! let check = client.domains().check("mysite", "org").await?;
//! if check.available {
//!     let order = client.domains().purchase("mysite", "org", "BTC", None).await?;
//!     // Retain order.domain_secret: it is the only credential for this domain.
//! }
//! ```

pub mod client;
pub mod domains;
pub mod error;
pub mod giftcards;
pub mod swap;
pub mod twitter;
pub mod zk;

mod http;

pub use client::Client;
pub use domains::DomainClient;
pub use error::{Error, Result};
pub use giftcards::GiftCardClient;
pub use swap::SwapClient;
pub use twitter::TwitterClient;
pub use zk::{Group, Identity, MembershipProof, ProofSystem, Sha256System};
