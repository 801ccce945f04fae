//! Synchronous client
//!
//! [`TgtgClient`] wraps the async [`crate::TgtgClient`] together with a
//! current-thread tokio runtime and blocks the calling thread until each
//! request completes. Every operation is a flat method, one per endpoint.
//!
//! Like `reqwest::blocking`, it must not be used from inside an async
//! runtime; `block_on` panics there.

use crate::client;
use crate::config::ClientConfig;
use crate::endpoints::{
    BucketParams, DiscoverParams, ItemsNearbyParams, ManufacturerItemsParams, OrderRating,
};
use crate::error::{ApiError, ApiResult};
use crate::session::Session;
use crate::types::JsonResponse;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

/// Blocking TGTG API client
pub struct TgtgClient {
    inner: client::TgtgClient,
    runtime: Runtime,
}

impl TgtgClient {
    /// Create a new client with configuration from the environment
    pub fn new() -> ApiResult<Self> {
        Self::wrap(client::TgtgClient::new()?)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        Self::wrap(client::TgtgClient::with_config(config)?)
    }

    /// Create a new client with specific configuration and session
    pub fn with_session(config: ClientConfig, session: Session) -> ApiResult<Self> {
        Self::wrap(client::TgtgClient::with_session(config, session)?)
    }

    fn wrap(inner: client::TgtgClient) -> ApiResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ApiError::Runtime)?;
        Ok(Self { inner, runtime })
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.inner.config()
    }

    /// Get the session state
    #[must_use]
    pub fn session(&self) -> &Session {
        self.inner.session()
    }

    /// Borrow the async client
    #[must_use]
    pub fn as_async(&self) -> &client::TgtgClient {
        &self.inner
    }

    /// Set the bearer token sent as `Authorization: Bearer <token>`
    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.inner.set_bearer_token(token);
    }

    /// Set the user id used in request payloads
    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.inner.set_user_id(user_id);
    }

    /// Set the currency code
    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.inner.set_currency(currency);
    }

    /// Set the language tag (`xx-YY`) and derived country code
    pub fn set_language(&mut self, tag: &str) -> ApiResult<()> {
        self.inner.set_language(tag)
    }

    /// POST /location/v1/lookup
    pub fn nearby_restaurants(&self, latitude: f64, longitude: f64) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.location().nearby_restaurants(latitude, longitude))
    }

    /// POST /order/v6/active
    pub fn active_orders(&self) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.orders().active())
    }

    /// POST /user/v1/mePage
    pub fn active_user_page(&self) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.user().me_page())
    }

    /// POST /app/v1/onStartup
    pub fn startup_info(&self) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.app().startup_info())
    }

    /// POST /discover/v1/
    pub fn discover(&self, params: &DiscoverParams) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.discover().page(params))
    }

    /// POST /item/v7/
    pub fn items_nearby(&self, params: &ItemsNearbyParams) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.items().nearby(params))
    }

    /// POST /store/v4/{store_id}
    pub fn store_info(&self, longitude: f64, latitude: f64, store_id: &str) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.stores().info(longitude, latitude, store_id))
    }

    /// POST /item/v7/{item_id}
    pub fn item_info(&self, longitude: f64, latitude: f64, item_id: &str) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.items().info(longitude, latitude, item_id))
    }

    /// POST /manufactureritem/v1/
    pub fn manufacturer_items(&self, params: &ManufacturerItemsParams) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.items().manufacturer(params))
    }

    /// POST /discover/v1/bucket
    pub fn bucket_contents(&self, params: &BucketParams) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.discover().bucket(params))
    }

    /// POST /order/v6/{order_id}
    pub fn order_info(&self, order_id: &str) -> ApiResult<JsonResponse> {
        self.block_on(self.inner.orders().info(order_id))
    }

    /// POST /order/v6/{order_id}/rate, returning the HTTP status code
    pub fn rate_order(&self, order_id: &str, rating: &OrderRating) -> ApiResult<u16> {
        self.block_on(self.inner.orders().rate(order_id, rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_client_setters() {
        let mut client = TgtgClient::with_config(ClientConfig::default()).unwrap();
        client.set_bearer_token("abc");
        client.set_user_id("u1");
        client.set_language("fr-FR").unwrap();

        assert_eq!(client.session().authorization().as_deref(), Some("Bearer abc"));
        assert_eq!(client.as_async().session().country_code(), Some("FR"));
        assert!(client.set_language("fr").is_err());
    }
}
