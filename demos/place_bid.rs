//! Demonstrates the bid flow: fetch the fee quote, then create the bid.
//!
//! Confirming the bid requires signing the returned PSBT with a wallet
//! and calling `confirm_bid`, which this demo stops short of.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=debug,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example place_bid --features tracing
//! ```
//!
//! Required environment variables:
//! - `MARKET_API_KEY`: bearer API key
//! - `AUCTION_ID`: auction to bid on
//! - `BID_PRICE`: bid price in sats
//! - `ADDRESS`: bidder's payment address
//! - `PUBKEY`: bidder's public key (hex)
//!
//! Optional environment variables:
//! - `HOST` (default: <https://open-api.ordmarket.io>)
//! - `FEE_RATE`: network fee rate in sat/vB (default: the server's quote)

use ordmarket_client_sdk::market::Client;
use ordmarket_client_sdk::market::types::{AssetType, CreateBidPrepareRequest, CreateBidRequest};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("MARKET_API_KEY").expect("Need MARKET_API_KEY");
    let host =
        std::env::var("HOST").unwrap_or_else(|_| "https://open-api.ordmarket.io".to_owned());

    let auction_id = std::env::var("AUCTION_ID").expect("Need AUCTION_ID");
    let bid_price: u64 = std::env::var("BID_PRICE")
        .expect("Need BID_PRICE")
        .parse()?;
    let address = std::env::var("ADDRESS").expect("Need ADDRESS");
    let pubkey = std::env::var("PUBKEY").expect("Need PUBKEY");

    let client = Client::new(&host, api_key.into())?;

    let prepare = CreateBidPrepareRequest::builder()
        .auction_id(auction_id.as_str())
        .bid_price(bid_price)
        .address(address.as_str())
        .pubkey(pubkey.as_str())
        .build();

    let quote = client.create_bid_prepare(AssetType::Brc20, &prepare).await?;
    info!(
        server_fee = quote.server_fee,
        fee_rate = quote.fee_rate,
        available_balance = quote.available_balance,
        "fee quote received"
    );

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "server quotes whole sat/vB values"
    )]
    let fee_rate: u64 = std::env::var("FEE_RATE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(quote.fee_rate.ceil() as u64);

    let request = CreateBidRequest::builder()
        .auction_id(auction_id)
        .fee_rate(fee_rate)
        .address(address)
        .pubkey(pubkey)
        .bid_price(bid_price)
        .build();

    match client.create_bid(AssetType::Brc20, &request).await {
        Ok(bid) => info!(
            bid_id = %bid.bid_id,
            network_fee = bid.network_fee,
            sign_indexes = ?bid.bid_sign_indexes,
            "bid created; sign the PSBT and call confirm_bid"
        ),
        Err(e) => error!(endpoint = "create_bid", error = %e),
    }

    Ok(())
}
