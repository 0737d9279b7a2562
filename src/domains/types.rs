//! Wire types for the domain API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Availability and pricing for a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainAvailability {
    pub available: bool,
    /// Canonical form of the queried domain (name + tld).
    pub domain: String,
    #[serde(rename = "priceEUR")]
    pub price_eur: Decimal,
}

/// A domain purchase order.
///
/// `domain_secret` is the sole credential for future DNS management and
/// ownership queries. Losing it means losing control of the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainOrder {
    pub order_id: String,
    pub domain_name: String,
    /// Payment currency chosen at purchase time.
    pub currency: String,
    /// Crypto amount to deposit, as quoted by the server.
    pub amount_crypto: String,
    pub deposit_address: String,
    /// Server-defined status (e.g. "pending", "registered").
    pub status: String,
    pub domain_secret: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A domain owned by a commitment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub domain: String,
    pub status: String,
    /// Registrar expiry, in the server's own date format.
    pub expiry_date: String,
}

/// A DNS record as stored by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
}

/// Fields for a new DNS record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDnsRecord {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
}

/// Partial update for an existing DNS record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DnsRecordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// Plain acknowledgement returned by DNS update/delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_availability() {
        let json = r#"{"available":true,"domain":"mysite.org","priceEUR":12.5}"#;
        let availability: DomainAvailability = serde_json::from_str(json).unwrap();
        assert!(availability.available);
        assert_eq!(availability.domain, "mysite.org");
        assert_eq!(availability.price_eur, dec!(12.5));
    }

    #[test]
    fn parses_order() {
        let json = r#"{
            "orderId": "ord-1",
            "domainName": "mysite.org",
            "currency": "BTC",
            "amountCrypto": "0.00042",
            "depositAddress": "bc1qdeposit",
            "status": "pending",
            "domainSecret": "s3cret",
            "createdAt": "2025-06-01T12:00:00Z"
        }"#;

        let order: DomainOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, "ord-1");
        assert_eq!(order.amount_crypto, "0.00042");
        assert!(!order.domain_secret.is_empty());
        assert_eq!(order.created_at.year(), 2025);
    }

    #[test]
    fn dns_record_uses_type_key() {
        let json = r#"{"id":"r1","type":"A","name":"@","content":"192.0.2.1","ttl":3600}"#;
        let record: DnsRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_type, "A");

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back.get("type").and_then(|v| v.as_str()), Some("A"));
    }

    #[test]
    fn update_omits_unset_fields() {
        let update = DnsRecordUpdate {
            content: Some("198.51.100.7".to_string()),
            ttl: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("content").is_some());
        assert!(json.get("ttl").is_none());
    }
}
