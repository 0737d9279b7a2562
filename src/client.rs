//! Aggregate client bundling all Zekta API areas.

use crate::domains::DomainClient;
use crate::giftcards::GiftCardClient;
use crate::http::HttpClient;
use crate::swap::SwapClient;
use crate::twitter::TwitterClient;
use crate::zk::{ProofSystem, Sha256System};

/// The main client for interacting with Zekta.
///
/// Constructs the four area clients over a single shared `reqwest::Client`
/// (one connection pool) and one proof system instance. The client holds no
/// state beyond configuration: sessions, secrets and order ids stay with the
/// caller.
#[derive(Debug, Clone)]
pub struct Client<P: ProofSystem = Sha256System> {
    swaps: SwapClient,
    domains: DomainClient<P>,
    giftcards: GiftCardClient<P>,
    twitter: TwitterClient<P>,
}

impl Client<Sha256System> {
    /// Create a new client with the default proof backend.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the Zekta API (e.g., "https://zekta.io")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_proof_system(base_url, Sha256System)
    }
}

impl<P: ProofSystem + Clone> Client<P> {
    /// Create a client over a specific proof backend.
    ///
    /// The backend is shared by the domain, gift-card and posting clients,
    /// so commitments derived for ownership queries match the ones proofs
    /// are generated for.
    pub fn with_proof_system(base_url: impl Into<String>, proof_system: P) -> Self {
        let http = HttpClient::with_client(base_url, reqwest::Client::new());

        Self {
            swaps: SwapClient::with_http(http.clone()),
            domains: DomainClient::with_http(http.clone(), proof_system.clone()),
            giftcards: GiftCardClient::with_http(http.clone(), proof_system.clone()),
            twitter: TwitterClient::with_http(http, proof_system),
        }
    }
}

impl<P: ProofSystem> Client<P> {
    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.swaps.base_url()
    }

    /// Crypto-to-crypto swap endpoints.
    pub fn swaps(&self) -> &SwapClient {
        &self.swaps
    }

    /// Anonymous domain registration endpoints.
    pub fn domains(&self) -> &DomainClient<P> {
        &self.domains
    }

    /// Anonymous gift-card endpoints.
    pub fn giftcards(&self) -> &GiftCardClient<P> {
        &self.giftcards
    }

    /// Anonymous posting endpoints.
    pub fn twitter(&self) -> &TwitterClient<P> {
        &self.twitter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_clients_share_base_url() {
        let client = Client::new("https://zekta.io/");
        assert_eq!(client.base_url(), "https://zekta.io");
        assert_eq!(client.swaps().base_url(), "https://zekta.io");
        assert_eq!(client.domains().base_url(), "https://zekta.io");
        assert_eq!(client.giftcards().base_url(), "https://zekta.io");
        assert_eq!(client.twitter().base_url(), "https://zekta.io");
    }
}
