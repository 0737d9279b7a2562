//! Wire types for the swap API.
//!
//! These types match the Zekta backend schema and are used for
//! request/response serialization. The API speaks camelCase JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A supported currency for swaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub symbol: String,
    pub name: String,
    pub network: String,
    /// Whether deposits to this currency need an extra id (memo/tag).
    pub has_extra_id: bool,
}

/// Advisory quote for a swap. Not binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapEstimate {
    pub estimated_amount: Decimal,
    pub rate: Decimal,
    pub network_fee: Decimal,
}

/// Inclusive min/max transferable amount for a currency pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Swap lifecycle states reported by the service.
///
/// The field is server-defined; unknown values are echoed via `Other`
/// rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwapState {
    Pending,
    Confirming,
    Exchanging,
    Sending,
    Finished,
    Failed,
    Refunded,
    /// Any state this client version does not know about.
    #[serde(untagged)]
    Other(String),
}

impl SwapState {
    pub fn as_str(&self) -> &str {
        match self {
            SwapState::Pending => "pending",
            SwapState::Confirming => "confirming",
            SwapState::Exchanging => "exchanging",
            SwapState::Sending => "sending",
            SwapState::Finished => "finished",
            SwapState::Failed => "failed",
            SwapState::Refunded => "refunded",
            SwapState::Other(s) => s,
        }
    }
}

impl std::fmt::Display for SwapState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request to open a swap order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSwapRequest {
    pub from_chain: String,
    pub to_chain: String,
    pub currency_from: String,
    pub currency_to: String,
    /// Sent as a JSON number; the API does not accept string amounts here.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_from: Decimal,
    /// Destination address for the swapped funds.
    pub address_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_refund_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_id_to: Option<String>,
}

/// Exchange order details, shared by the create and status responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    pub id: String,
    /// Deposit address the caller must fund.
    pub address_from: String,
    pub address_to: String,
    pub amount_from: Decimal,
    pub expected_amount: Decimal,
    pub currency_from: String,
    pub currency_to: String,
    pub status: SwapState,
    /// Inbound transaction id, once seen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_from: Option<String>,
    /// Outbound transaction id, once sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_to: Option<String>,
}

/// Response from creating a swap order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapOrder {
    pub ok: bool,
    pub exchange: Exchange,
}

/// Response from polling a swap order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapStatus {
    pub ok: bool,
    pub exchange: Exchange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_status_response() {
        let json = r#"{
            "ok": true,
            "exchange": {
                "id": "ex-123",
                "addressFrom": "bc1qdeposit",
                "addressTo": "0xdest",
                "amountFrom": "0.5",
                "expectedAmount": "0.0123",
                "currencyFrom": "BTC",
                "currencyTo": "ETH",
                "status": "exchanging",
                "txFrom": "abcd"
            }
        }"#;

        let status: SwapStatus = serde_json::from_str(json).unwrap();
        assert!(status.ok);
        assert_eq!(status.exchange.status, SwapState::Exchanging);
        assert_eq!(status.exchange.amount_from, dec!(0.5));
        assert_eq!(status.exchange.tx_from.as_deref(), Some("abcd"));
        assert_eq!(status.exchange.tx_to, None);
    }

    #[test]
    fn unknown_state_is_echoed() {
        let state: SwapState = serde_json::from_str(r#""verifying""#).unwrap();
        assert_eq!(state, SwapState::Other("verifying".to_string()));
        assert_eq!(state.as_str(), "verifying");
    }

    #[test]
    fn create_request_omits_empty_optionals() {
        let request = CreateSwapRequest {
            from_chain: "BTC".to_string(),
            to_chain: "ETH".to_string(),
            currency_from: "BTC".to_string(),
            currency_to: "ETH".to_string(),
            amount_from: dec!(0.1),
            address_to: "0xdest".to_string(),
            user_refund_address: None,
            extra_id_to: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("userRefundAddress").is_none());
        assert!(json.get("extraIdTo").is_none());
        assert!(json.get("addressTo").is_some());
    }
}
