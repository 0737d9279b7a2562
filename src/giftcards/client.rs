//! HTTP client for the gift-card endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::zk::{ProofSystem, Sha256System};

use super::types::*;

#[derive(Deserialize)]
struct CatalogEnvelope {
    catalog: Vec<CatalogItem>,
}

#[derive(Deserialize)]
struct CardsEnvelope {
    cards: Vec<GiftCardDetails>,
}

#[derive(Deserialize)]
struct GroupEnvelope {
    members: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateOrderRequest<'a> {
    gift_card_type: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    denomination: Decimal,
    currency: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CommitmentRequest<'a> {
    zk_commitment: &'a str,
}

/// Client for the `/api/giftcards` endpoints.
#[derive(Debug, Clone)]
pub struct GiftCardClient<P: ProofSystem = Sha256System> {
    http: HttpClient,
    proof_system: P,
}

impl GiftCardClient<Sha256System> {
    /// Create a new gift-card client with the default proof backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_proof_system(base_url, Sha256System)
    }
}

impl<P: ProofSystem> GiftCardClient<P> {
    /// Create a gift-card client over a specific proof backend.
    pub fn with_proof_system(base_url: impl Into<String>, proof_system: P) -> Self {
        Self {
            http: HttpClient::new(base_url),
            proof_system,
        }
    }

    pub(crate) fn with_http(http: HttpClient, proof_system: P) -> Self {
        Self { http, proof_system }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Browse the available gift-card catalog.
    pub async fn catalog(&self) -> Result<Vec<CatalogItem>> {
        let envelope: CatalogEnvelope = self.http.get_json("/api/giftcards/catalog").await?;
        Ok(envelope.catalog)
    }

    /// Create a gift-card order.
    ///
    /// The returned order carries the `gift_card_secret` the caller must
    /// retain to retrieve the card later. This has server-side effects; do
    /// not retry blindly on failure.
    pub async fn create_order(
        &self,
        card_type: &str,
        denomination: Decimal,
        currency: &str,
    ) -> Result<GiftCardOrder> {
        if card_type.is_empty() || currency.is_empty() {
            return Err(Error::Validation(
                "giftCardType and currency are required".to_string(),
            ));
        }
        if denomination <= Decimal::ZERO {
            return Err(Error::Validation(format!(
                "denomination must be positive, got {}",
                denomination
            )));
        }

        let request = CreateOrderRequest {
            gift_card_type: card_type,
            denomination,
            currency,
        };
        self.http.post_json("/api/giftcards/order", &request).await
    }

    /// Poll a gift-card order.
    pub async fn order_status(&self, order_id: &str) -> Result<GiftCardOrder> {
        let path = format!("/api/giftcards/order/{}", order_id);
        self.http.get_json(&path).await
    }

    /// Retrieve delivered cards with a group-membership proof.
    ///
    /// Flow: restore the identity from `secret`, fetch the current
    /// membership group for its commitment, snapshot the group locally, and
    /// prove membership with the commitment as both signal and scope (so the
    /// proof cannot be replayed for a different claim). The proof plus the
    /// group's merkle depth and root are submitted to the verify-and-get
    /// endpoint, which returns the card secrets.
    ///
    /// Fails if the group fetch fails, the proof cannot be built (empty
    /// group, commitment not a member) or the server rejects verification
    /// (stale root, already redeemed).
    pub async fn retrieve_cards(&self, secret: &str) -> Result<Vec<GiftCardDetails>> {
        let identity = self.proof_system.identity(Some(secret))?;
        let commitment = identity.commitment().to_string();

        let path = format!("/api/giftcards/group?zkCommitment={}", commitment);
        let group_data: GroupEnvelope = self.http.get_json(&path).await?;

        let group = self.proof_system.group(group_data.members)?;
        let proof = self
            .proof_system
            .prove(&identity, &group, &commitment, &commitment)?;

        let envelope: CardsEnvelope = self
            .http
            .post_json("/api/giftcards/verify-and-get", &proof)
            .await?;
        Ok(envelope.cards)
    }

    /// List delivered cards by commitment alone.
    ///
    /// Weaker than [`retrieve_cards`](Self::retrieve_cards): no proof is
    /// generated, the server trusts the derived commitment as a lookup key.
    pub async fn my_cards(&self, secret: &str) -> Result<Vec<GiftCardDetails>> {
        let identity = self.proof_system.identity(Some(secret))?;
        let request = CommitmentRequest {
            zk_commitment: identity.commitment(),
        };
        let envelope: CardsEnvelope = self
            .http
            .post_json("/api/giftcards/my-cards", &request)
            .await?;
        Ok(envelope.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn create_order_rejects_zero_denomination() {
        let client = GiftCardClient::new("https://zekta.io");
        let err = client
            .create_order("amazon-de", Decimal::ZERO, "BTC")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn create_order_rejects_missing_type() {
        let client = GiftCardClient::new("https://zekta.io");
        let err = client
            .create_order("", dec!(50), "BTC")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn retrieve_cards_rejects_empty_secret() {
        let client = GiftCardClient::new("https://zekta.io");
        let err = client.retrieve_cards("").await.unwrap_err();
        assert!(matches!(err, Error::InvalidSecret(_)));
    }

    #[test]
    fn commitment_request_uses_zk_key() {
        let request = CommitmentRequest {
            zk_commitment: "abc123",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json.get("zkCommitment").and_then(|v| v.as_str()), Some("abc123"));
    }
}
