//! Ordinals marketplace auction API client SDK.
//!
//! This crate provides a typed async client for the marketplace open API,
//! covering the auction flow for listing inscriptions and bidding on them:
//!
//! - **Listing**: prepare a put-on (returns a PSBT to sign) and confirm it
//! - **Bidding**: prepare a bid (fee quote), create the bid (returns a PSBT
//!   to sign) and confirm it
//!
//! Every endpoint responds with a uniform envelope `{code, msg, data}`.
//! The client unwraps the envelope for you: a `code` of zero resolves to
//! the typed `data` payload, anything else surfaces as an [`Error`] of kind
//! [`error::Kind::Api`] carrying the server's `msg`.
//!
//! PSBTs (partially signed bitcoin transactions) are opaque strings here;
//! signing them is the caller's (wallet's) responsibility.
//!
//! # Example
//!
//! ```rust,no_run
//! use ordmarket_client_sdk::market::Client;
//! use ordmarket_client_sdk::market::types::{AssetType, CreatePutOnRequest, MarketType};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = Client::new("https://open-api.ordmarket.io", "your-api-key".into())?;
//!
//! let request = CreatePutOnRequest::builder()
//!     .inscription_id("e9b1...i0")
//!     .init_price("100000")
//!     .unit_price("50")
//!     .pubkey("03a1...")
//!     .market_type(MarketType::FixedPrice)
//!     .build();
//!
//! let prepared = client.create_put_on_prepare(AssetType::Brc20, &request).await?;
//! println!("auction {} awaiting signature", prepared.auction_id);
//! # Ok(())
//! # }
//! ```

use serde::Deserialize;

pub mod error;
pub mod market;

pub use error::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Uniform wrapper every marketplace response arrives in.
///
/// `code == 0` signals success and `data` holds the payload; any other
/// value signals failure and `msg` carries the human-readable reason.
/// Failure envelopes routinely omit `data` entirely, so it is optional
/// at the wire level.
#[non_exhaustive]
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Zero on success, a server-defined error code otherwise.
    pub code: i64,
    /// Human-readable outcome description.
    pub msg: String,
    /// Payload, present on success.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwraps the envelope into its payload.
    ///
    /// # Errors
    ///
    /// Returns an [`error::Kind::Api`] error carrying `msg` when `code` is
    /// non-zero, or a transport error if a success envelope arrived
    /// without a payload.
    pub fn into_data(self) -> Result<T> {
        if self.code != 0 {
            return Err(Error::api(self.msg));
        }

        self.data
            .ok_or_else(|| Error::transport("success envelope carried no data"))
    }
}
