//! Anonymous posting client and types.
//!
//! Wraps the `/api/twitter` endpoints. Posting requires a session: the
//! caller fetches a nonce, proves membership of a commitment group with the
//! nonce as both signal and scope, and exchanges the proof for a bearer
//! token. The token is caller-held; the SDK keeps no session state, and an
//! expired token simply surfaces as a server-side authentication failure on
//! next use.

mod client;
mod types;

pub use client::TwitterClient;
pub use types::*;
