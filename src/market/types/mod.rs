//! Request and response types for the auction endpoints.

pub mod request;
pub mod response;

pub use request::{
    AssetType, ConfirmBidRequest, ConfirmPutOnRequest, CreateBidPrepareRequest, CreateBidRequest,
    CreatePutOnRequest, MarketType,
};
pub use response::{CreateBidPrepareResponse, CreateBidResponse, CreatePutOnPrepareResponse};
