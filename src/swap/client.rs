//! HTTP client for the swap endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::http::HttpClient;

use super::types::*;

#[derive(Deserialize)]
struct CurrenciesEnvelope {
    currencies: Vec<Currency>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateRequest<'a> {
    currency_from: &'a str,
    currency_to: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    fixed: bool,
}

/// Client for the `/api/swap` endpoints.
#[derive(Debug, Clone)]
pub struct SwapClient {
    http: HttpClient,
}

impl SwapClient {
    /// Create a new swap client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the Zekta API (e.g., "https://zekta.io")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }

    pub(crate) fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// List all supported currencies.
    pub async fn currencies(&self) -> Result<Vec<Currency>> {
        let envelope: CurrenciesEnvelope = self.http.get_json("/api/swap/currencies").await?;
        Ok(envelope.currencies)
    }

    /// Get an advisory estimate for swapping `amount` of `from` into `to`.
    ///
    /// `fixed` requests a fixed-rate quote.
    pub async fn estimate(
        &self,
        from: &str,
        to: &str,
        amount: Decimal,
        fixed: bool,
    ) -> Result<SwapEstimate> {
        let request = EstimateRequest {
            currency_from: from,
            currency_to: to,
            amount,
            fixed,
        };
        self.http.post_json("/api/swap/estimate", &request).await
    }

    /// Get the inclusive min/max transferable amount for a pair.
    pub async fn range(&self, from: &str, to: &str) -> Result<SwapRange> {
        let path = format!("/api/swap/range?currencyFrom={}&currencyTo={}", from, to);
        self.http.get_json(&path).await
    }

    /// Open a swap order.
    ///
    /// This has server-side effects; do not retry blindly on failure.
    pub async fn create(&self, request: &CreateSwapRequest) -> Result<SwapOrder> {
        if request.currency_from.is_empty() || request.currency_to.is_empty() {
            return Err(Error::Validation(
                "currencyFrom and currencyTo are required".to_string(),
            ));
        }
        if request.address_to.is_empty() {
            return Err(Error::Validation("addressTo is required".to_string()));
        }
        if request.amount_from <= Decimal::ZERO {
            return Err(Error::Validation(format!(
                "amountFrom must be positive, got {}",
                request.amount_from
            )));
        }

        self.http.post_json("/api/swap/create", request).await
    }

    /// Poll the current status of a swap order.
    pub async fn status(&self, exchange_id: &str) -> Result<SwapStatus> {
        let path = format!("/api/swap/exchange/{}", exchange_id);
        self.http.get_json(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> CreateSwapRequest {
        CreateSwapRequest {
            from_chain: "BTC".to_string(),
            to_chain: "ETH".to_string(),
            currency_from: "BTC".to_string(),
            currency_to: "ETH".to_string(),
            amount_from: dec!(0.1),
            address_to: "0xdest".to_string(),
            user_refund_address: None,
            extra_id_to: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_non_positive_amount() {
        let client = SwapClient::new("https://zekta.io");
        let mut bad = request();
        bad.amount_from = Decimal::ZERO;

        let err = client.create(&bad).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_missing_destination() {
        let client = SwapClient::new("https://zekta.io");
        let mut bad = request();
        bad.address_to.clear();

        let err = client.create(&bad).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
