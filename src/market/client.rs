//! Auction client implementation
//!
//! Provides the [`Client`] for the marketplace auction API. All endpoints
//! require a bearer API key.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, Request};
use secrecy::{ExposeSecret as _, SecretString};
#[cfg(feature = "tracing")]
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::market::types::request::{
    AssetType, ConfirmBidRequest, ConfirmPutOnRequest, CreateBidPrepareRequest, CreateBidRequest,
    CreatePutOnRequest,
};
use crate::market::types::response::{
    CreateBidPrepareResponse, CreateBidResponse, CreatePutOnPrepareResponse,
};
use crate::{Envelope, Result};

/// Client for the marketplace auction API.
///
/// Holds the base URL and the bearer credential, both immutable for the
/// client's lifetime. The client keeps no per-call state, so a single
/// instance can be shared and calls may be issued concurrently.
///
/// # Example
///
/// ```rust,no_run
/// use ordmarket_client_sdk::market::Client;
/// use ordmarket_client_sdk::market::types::{AssetType, ConfirmPutOnRequest};
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = Client::new("https://open-api.ordmarket.io", "your-api-key".into())?;
///
/// let request = ConfirmPutOnRequest::builder()
///     .auction_id("a7f3...")
///     .psbt("cHNidP8B...")
///     .from_base64(true)
///     .build();
///
/// client.confirm_put_on(AssetType::Brc20, &request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    host: Url,
    http: ReqwestClient,
}

impl Client {
    /// Creates a new auction client.
    ///
    /// # Arguments
    ///
    /// * `host` - The base URL for the marketplace API (e.g., `https://open-api.ordmarket.io`)
    /// * `api_key` - Bearer API key sent with every request
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid, the API key cannot be
    /// used as a header value, or the HTTP client cannot be created.
    pub fn new(host: &str, api_key: SecretString) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_static("rs_market_client"));
        headers.insert("Accept", HeaderValue::from_static("application/json"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))?;
        authorization.set_sensitive(true);
        headers.insert("Authorization", authorization);

        let http = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            host: Url::parse(host)?,
            http,
        })
    }

    /// Returns the host URL.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Executes a request and unwraps the response envelope into its payload.
    async fn request<Response: serde::de::DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<Response> {
        let method = request.method().clone();
        let path = request.url().path().to_owned();

        #[cfg(feature = "tracing")]
        debug!(%method, %path, "dispatching request");

        let response = self.http.execute(request).await?;
        let status = response.status();

        #[cfg(feature = "tracing")]
        debug!(%method, %path, %status, "received response");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status, method, path, message));
        }

        let envelope = response.json::<Envelope<Response>>().await?;
        envelope.into_data()
    }

    /// Executes a request whose envelope carries an empty object.
    ///
    /// The confirm endpoints (`confirm_put_on`, `confirm_bid`) report
    /// success purely through the envelope `code`; whatever `data` they
    /// attach is discarded. The standard `request` helper would reject a
    /// missing payload.
    async fn request_empty(&self, request: Request) -> Result<()> {
        let method = request.method().clone();
        let path = request.url().path().to_owned();

        #[cfg(feature = "tracing")]
        debug!(%method, %path, "dispatching request");

        let response = self.http.execute(request).await?;
        let status = response.status();

        #[cfg(feature = "tracing")]
        debug!(%method, %path, %status, "received response");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status, method, path, message));
        }

        let envelope = response.json::<Envelope<serde_json::Value>>().await?;
        if envelope.code != 0 {
            return Err(Error::api(envelope.msg));
        }

        Ok(())
    }

    // =========================================================================
    // Listing Endpoints
    // =========================================================================

    /// Prepares a listing for an inscription.
    ///
    /// Returns the created auction together with a PSBT the seller must
    /// sign and pass to [`Client::confirm_put_on`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the server rejects
    /// the listing.
    pub async fn create_put_on_prepare(
        &self,
        asset: AssetType,
        request: &CreatePutOnRequest,
    ) -> Result<CreatePutOnPrepareResponse> {
        let http_request = self
            .http
            .request(
                Method::POST,
                format!("{}v3/market/{asset}/auction/create_put_on", self.host),
            )
            .json(request)
            .build()?;

        self.request(http_request).await
    }

    /// Confirms a prepared listing with the signed PSBT, putting it on sale.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the server rejects
    /// the signed PSBT.
    pub async fn confirm_put_on(
        &self,
        asset: AssetType,
        request: &ConfirmPutOnRequest,
    ) -> Result<()> {
        let http_request = self
            .http
            .request(
                Method::POST,
                format!("{}v3/market/{asset}/auction/confirm_put_on", self.host),
            )
            .json(request)
            .build()?;

        self.request_empty(http_request).await
    }

    // =========================================================================
    // Bidding Endpoints
    // =========================================================================

    /// Fetches the fee quote for an intended bid.
    ///
    /// Reports the service fee, the estimated network fee rate and the
    /// bidder's balances, so the caller can surface costs before
    /// committing to [`Client::create_bid`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the auction cannot
    /// be bid on.
    pub async fn create_bid_prepare(
        &self,
        asset: AssetType,
        request: &CreateBidPrepareRequest,
    ) -> Result<CreateBidPrepareResponse> {
        let http_request = self
            .http
            .request(
                Method::POST,
                format!("{}v3/market/{asset}/auction/create_bid_prepare", self.host),
            )
            .json(request)
            .build()?;

        self.request(http_request).await
    }

    /// Creates a bid on an auction.
    ///
    /// Returns the created bid together with a PSBT the bidder must sign
    /// and pass to [`Client::confirm_bid`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the server rejects
    /// the bid.
    pub async fn create_bid(
        &self,
        asset: AssetType,
        request: &CreateBidRequest,
    ) -> Result<CreateBidResponse> {
        let http_request = self
            .http
            .request(
                Method::POST,
                format!("{}v3/market/{asset}/auction/create_bid", self.host),
            )
            .json(request)
            .build()?;

        self.request(http_request).await
    }

    /// Confirms a bid with the signed PSBTs, settling the auction.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the server rejects
    /// the signed PSBTs.
    pub async fn confirm_bid(&self, asset: AssetType, request: &ConfirmBidRequest) -> Result<()> {
        let http_request = self
            .http
            .request(
                Method::POST,
                format!("{}v3/market/{asset}/auction/confirm_bid", self.host),
            )
            .json(request)
            .build()?;

        self.request_empty(http_request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_should_reject_invalid_host() {
        let result = Client::new("not a url", "key".into());
        assert!(result.is_err(), "invalid host should fail construction");
    }

    #[test]
    fn new_should_reject_unusable_api_key() {
        let result = Client::new("https://open-api.ordmarket.io", "line\nbreak".into());
        assert!(result.is_err(), "api key with control bytes should fail");
    }

    #[test]
    fn host_keeps_trailing_slash() {
        let client = Client::new("https://open-api.ordmarket.io", "key".into())
            .expect("construction should succeed");
        assert_eq!(client.host().as_str(), "https://open-api.ordmarket.io/");
    }
}
