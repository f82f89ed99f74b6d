//! Auction request types

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Asset class an auction trades in.
///
/// Selects the market sub-resource in the request path; the `Display`
/// form is the exact path segment sent over the wire.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssetType {
    /// BRC-20 token inscriptions
    Brc20,
    /// Collection inscriptions
    Collection,
    /// Domain (name) inscriptions
    Domain,
}

/// How a listing is priced.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MarketType {
    /// Fixed-price listing (the only mode the API currently offers)
    #[default]
    FixedPrice,
}

/// Request body for preparing a listing.
///
/// The response carries a PSBT the seller must sign before confirming.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct CreatePutOnRequest {
    /// Inscription being listed.
    pub inscription_id: String,
    /// Total listing price, in sats, as a decimal string.
    pub init_price: String,
    /// Price per unit, in sats, as a decimal string.
    pub unit_price: String,
    /// Seller's public key (hex).
    pub pubkey: String,
    /// Pricing mode for the listing.
    pub market_type: MarketType,
}

/// Request body for confirming a listing with the signed PSBT.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct ConfirmPutOnRequest {
    /// Auction returned by the prepare step.
    pub auction_id: String,
    /// Signed listing PSBT.
    pub psbt: String,
    /// Whether `psbt` is base64-encoded (hex otherwise).
    pub from_base64: bool,
}

/// Request body for fetching the fee quote ahead of a bid.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct CreateBidPrepareRequest {
    /// Auction to bid on.
    pub auction_id: String,
    /// Intended bid price, in sats.
    pub bid_price: u64,
    /// Bidder's payment address.
    pub address: String,
    /// Bidder's public key (hex).
    pub pubkey: String,
}

/// Request body for creating a bid.
///
/// The response carries a bid PSBT the bidder must sign before
/// confirming.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct CreateBidRequest {
    /// Auction to bid on.
    pub auction_id: String,
    /// Network fee rate to use, in sat/vB.
    pub fee_rate: u64,
    /// Bidder's payment address.
    pub address: String,
    /// Bidder's public key (hex).
    pub pubkey: String,
    /// Bid price, in sats.
    pub bid_price: u64,
}

/// Request body for confirming a bid with the signed PSBTs.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct ConfirmBidRequest {
    /// Auction being settled.
    pub auction_id: String,
    /// Bid returned by the create step.
    pub bid_id: String,
    /// Signed bid PSBT.
    pub psbt_bid: String,
    /// Signed secondary bid PSBT.
    pub psbt_bid2: String,
    /// Signed settlement PSBT.
    pub psbt_settle: String,
    /// Whether the PSBTs are base64-encoded (hex otherwise).
    pub from_base64: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_type_display_matches_path_segment() {
        assert_eq!(AssetType::Brc20.to_string(), "brc20");
        assert_eq!(AssetType::Collection.to_string(), "collection");
        assert_eq!(AssetType::Domain.to_string(), "domain");
    }

    #[test]
    fn market_type_serializes_as_camel_case() {
        assert_eq!(
            serde_json::to_string(&MarketType::FixedPrice).expect("serialize"),
            "\"fixedPrice\""
        );
        assert_eq!(MarketType::FixedPrice.to_string(), "fixedPrice");
    }

    #[test]
    fn create_put_on_request_serializes_correctly() {
        let request = CreatePutOnRequest::builder()
            .inscription_id("abc")
            .init_price("100")
            .unit_price("10")
            .pubkey("pk")
            .market_type(MarketType::FixedPrice)
            .build();

        let json = serde_json::to_value(&request).expect("serialization should succeed");
        let object = json.as_object().expect("should be an object");

        assert_eq!(object.len(), 5, "no extraneous fields");
        assert_eq!(object["inscriptionId"], "abc");
        assert_eq!(object["initPrice"], "100");
        assert_eq!(object["unitPrice"], "10");
        assert_eq!(object["pubkey"], "pk");
        assert_eq!(object["marketType"], "fixedPrice");
        assert!(
            !object.contains_key("type"),
            "asset type belongs in the path, not the body"
        );
    }

    #[test]
    fn confirm_bid_request_serializes_correctly() {
        let request = ConfirmBidRequest::builder()
            .auction_id("a1")
            .bid_id("b1")
            .psbt_bid("psbt1")
            .psbt_bid2("psbt2")
            .psbt_settle("psbt3")
            .from_base64(true)
            .build();

        let json = serde_json::to_string(&request).expect("serialization should succeed");
        assert!(json.contains("\"auctionId\":\"a1\""));
        assert!(json.contains("\"bidId\":\"b1\""));
        assert!(json.contains("\"psbtBid2\":\"psbt2\""));
        assert!(json.contains("\"psbtSettle\":\"psbt3\""));
        assert!(json.contains("\"fromBase64\":true"));
    }
}
