//! Wire types for the gift-card API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A purchasable gift-card product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub denominations: Vec<Decimal>,
    pub currency: String,
    pub region: String,
}

/// A gift-card purchase order.
///
/// `gift_card_secret` is the sole credential for retrieving the delivered
/// card; it must be retained by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardOrder {
    pub order_id: String,
    pub gift_card_type: String,
    pub denomination: Decimal,
    pub currency: String,
    pub amount_crypto: String,
    pub deposit_address: String,
    pub status: String,
    pub gift_card_secret: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A delivered gift card, including its redeemable secrets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftCardDetails {
    pub order_id: String,
    pub gift_card_type: String,
    pub denomination: Decimal,
    pub card_number: String,
    pub card_pin: String,
    pub redeem_instructions: String,
    #[serde(with = "time::serde::rfc3339")]
    pub delivered_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_catalog_item() {
        let json = r#"{
            "id": "amazon-de",
            "name": "Amazon Germany",
            "brand": "Amazon",
            "denominations": [25, 50, 100],
            "currency": "EUR",
            "region": "DE"
        }"#;

        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.brand, "Amazon");
        assert_eq!(item.denominations, vec![dec!(25), dec!(50), dec!(100)]);
    }

    #[test]
    fn parses_delivered_card() {
        let json = r#"{
            "orderId": "gc-9",
            "giftCardType": "amazon-de",
            "denomination": 50,
            "cardNumber": "1234-5678",
            "cardPin": "0000",
            "redeemInstructions": "Redeem at amazon.de",
            "deliveredAt": "2025-06-02T08:30:00Z"
        }"#;

        let card: GiftCardDetails = serde_json::from_str(json).unwrap();
        assert_eq!(card.denomination, dec!(50));
        assert_eq!(card.card_number, "1234-5678");
    }
}
