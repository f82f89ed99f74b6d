//! Auction response types

#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use serde::Deserialize;

/// Response from preparing a listing.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Builder, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct CreatePutOnPrepareResponse {
    /// Identifier of the created auction.
    pub auction_id: String,
    /// Listing PSBT to be signed by the seller.
    pub psbt: String,
    /// Input indexes of `psbt` the seller must sign.
    pub sign_indexes: Vec<u32>,
}

/// Fee quote returned ahead of a bid.
///
/// All sat amounts are integers; rates are sat/vB.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Builder, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct CreateBidPrepareResponse {
    /// Marketplace service fee, in sats.
    pub server_fee: u64,
    /// Service fee before discounts, in sats.
    pub server_real: u64,
    /// Service fee rate applied.
    pub server_fee_rate: f64,
    /// Estimated transaction size, in vbytes.
    pub tx_size: u64,
    /// Suggested network fee rate, in sat/vB.
    pub fee_rate: f64,
    /// Value of the inscription output, in sats.
    pub nft_value: u64,
    /// Fee discounts applied to this bidder, server-defined shape.
    pub discounts: Vec<serde_json::Value>,
    /// Number of inscriptions in the auction.
    pub inscription_count: u64,
    /// Bidder balance available for this bid, in sats.
    pub available_balance: u64,
    /// Bidder's total balance, in sats.
    pub all_balance: u64,
}

/// Response from creating a bid.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, Builder, PartialEq)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct CreateBidResponse {
    /// Identifier of the created bid.
    pub bid_id: String,
    /// Bid PSBT to be signed by the bidder.
    pub psbt_bid: String,
    /// Marketplace service fee, in sats.
    pub server_fee: u64,
    /// Network fee, in sats.
    pub network_fee: u64,
    /// Network fee rate used, in sat/vB.
    pub fee_rate: f64,
    /// Value of the inscription output, in sats.
    pub nft_value: u64,
    /// Input indexes of `psbt_bid` the bidder must sign.
    pub bid_sign_indexes: Vec<u32>,
}
