//! Marketplace auction API client and types.
//!
//! This module covers the auction flow of the marketplace open API for
//! ordinals assets (BRC-20 tokens, collections and domains):
//!
//! - **Put on (listing)**: the seller prepares a listing and receives a
//!   PSBT to sign, then confirms the listing with the signed PSBT
//! - **Bidding**: the buyer fetches a fee quote, creates a bid (receiving
//!   a bid PSBT to sign), then confirms the bid to settle the auction
//!
//! All endpoints require a bearer API key, supplied at client
//! construction. PSBTs are passed through as opaque strings; signing is
//! the wallet's job.
//!
//! # Example
//!
//! ```rust,no_run
//! use ordmarket_client_sdk::market::Client;
//! use ordmarket_client_sdk::market::types::{AssetType, CreateBidPrepareRequest};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = Client::new("https://open-api.ordmarket.io", "your-api-key".into())?;
//!
//! // Fetch the fee quote before placing a bid
//! let request = CreateBidPrepareRequest::builder()
//!     .auction_id("a7f3...")
//!     .bid_price(120_000)
//!     .address("bc1p...")
//!     .pubkey("03a1...")
//!     .build();
//!
//! let quote = client.create_bid_prepare(AssetType::Brc20, &request).await?;
//! println!("server fee: {} sats at {} sat/vB", quote.server_fee, quote.fee_rate);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
