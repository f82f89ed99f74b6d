//! Demonstrates preparing a listing for an inscription.
//!
//! The prepare step only creates the auction server-side and returns a
//! PSBT; actually putting the inscription on sale requires signing that
//! PSBT with a wallet and calling `confirm_put_on`, which this demo
//! stops short of.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=debug,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example list_inscription --features tracing
//! ```
//!
//! Required environment variables:
//! - `MARKET_API_KEY`: bearer API key
//! - `INSCRIPTION_ID`: inscription to list
//! - `INIT_PRICE`: total listing price in sats (decimal string)
//! - `UNIT_PRICE`: price per unit in sats (decimal string)
//! - `PUBKEY`: seller's public key (hex)
//!
//! Optional environment variables:
//! - `HOST` (default: <https://open-api.ordmarket.io>)
//! - `ASSET_TYPE`: `brc20`, `collection` or `domain` (default: brc20)

use ordmarket_client_sdk::market::Client;
use ordmarket_client_sdk::market::types::{AssetType, CreatePutOnRequest, MarketType};
use tracing::{error, info};

fn asset_type_from_env() -> anyhow::Result<AssetType> {
    let raw = std::env::var("ASSET_TYPE").unwrap_or_else(|_| "brc20".to_owned());
    match raw.trim().to_ascii_lowercase().as_str() {
        "brc20" => Ok(AssetType::Brc20),
        "collection" => Ok(AssetType::Collection),
        "domain" => Ok(AssetType::Domain),
        _ => anyhow::bail!("ASSET_TYPE must be brc20, collection or domain (got {raw})"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("MARKET_API_KEY").expect("Need MARKET_API_KEY");
    let host =
        std::env::var("HOST").unwrap_or_else(|_| "https://open-api.ordmarket.io".to_owned());
    let asset = asset_type_from_env()?;

    let client = Client::new(&host, api_key.into())?;

    let request = CreatePutOnRequest::builder()
        .inscription_id(std::env::var("INSCRIPTION_ID").expect("Need INSCRIPTION_ID"))
        .init_price(std::env::var("INIT_PRICE").expect("Need INIT_PRICE"))
        .unit_price(std::env::var("UNIT_PRICE").expect("Need UNIT_PRICE"))
        .pubkey(std::env::var("PUBKEY").expect("Need PUBKEY"))
        .market_type(MarketType::FixedPrice)
        .build();

    match client.create_put_on_prepare(asset, &request).await {
        Ok(prepared) => info!(
            auction_id = %prepared.auction_id,
            sign_indexes = ?prepared.sign_indexes,
            "listing prepared; sign the PSBT and call confirm_put_on"
        ),
        Err(e) => error!(endpoint = "create_put_on_prepare", error = %e),
    }

    Ok(())
}
