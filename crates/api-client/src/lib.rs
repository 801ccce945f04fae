//! Client for the Too Good To Go mobile app API
//!
//! This crate talks to the private HTTP API the TGTG app uses. It does not
//! log in: obtain a bearer token elsewhere and hand it to the client.
//!
//! # Features
//!
//! - **Mobile app headers**: requests carry the header set of a known iOS build
//! - **Session state**: token, user id and language owned by one client
//! - **Typed payloads**: one request record per endpoint, JSON responses passed through
//! - **Blocking facade**: [`blocking::TgtgClient`] for synchronous callers
//!
//! Each operation issues exactly one POST. There is no retry, rate limiting
//! or pagination beyond the requested page.
//!
//! # Example
//!
//! ```rust,no_run
//! use tgtg_api_client::{ClientConfig, TgtgClient};
//! use tgtg_api_client::endpoints::ItemsNearbyParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = TgtgClient::with_config(ClientConfig::default())?;
//!     client.set_bearer_token("access-token");
//!     client.set_user_id("1234567");
//!     client.set_language("en-GB")?;
//!
//!     let items = client
//!         .items()
//!         .nearby(&ItemsNearbyParams::new(-0.1276, 51.5072).with_stock_only(true))
//!         .await?;
//!     println!("{items:#}");
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod blocking;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod session;
pub mod types;

pub use client::TgtgClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use session::{LanguageTag, Session};
pub use types::{JsonResponse, Origin};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::TgtgClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{
        AppApi, BucketParams, DiscoverApi, DiscoverParams, ItemsApi, ItemsNearbyParams,
        LocationApi, ManufacturerItemsParams, OrderRating, OrdersApi, PositiveFeedback, StoresApi,
        UserApi,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::session::{LanguageTag, Session};
    pub use crate::types::{JsonResponse, Origin};
}
