//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{AppApi, DiscoverApi, ItemsApi, LocationApi, OrdersApi, StoresApi, UserApi};
use crate::error::{ApiError, ApiResult};
use crate::session::Session;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, AUTHORIZATION, CONNECTION,
    USER_AGENT,
};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, Span};
use uuid::Uuid;

/// `Accept-Language` sent until a language is set on the session
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-GB";

/// TGTG API client
///
/// Wraps `reqwest` with the header set of the mobile app and a [`Session`]
/// holding the caller's credentials and locale. Each operation issues exactly
/// one POST; there is no retry, caching or background work.
///
/// Setters take `&mut self` while requests borrow `&self`, so the session
/// cannot change underneath an in-flight request.
#[derive(Clone)]
pub struct TgtgClient {
    inner: Client,
    config: Arc<ClientConfig>,
    session: Session,
}

impl TgtgClient {
    /// Create a new client with configuration from the environment
    ///
    /// The session starts empty; see [`Session::from_env`] to load
    /// credentials as well.
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        Self::with_session(config, Session::new())
    }

    /// Create a new client with specific configuration and session
    pub fn with_session(config: ClientConfig, session: Session) -> ApiResult<Self> {
        config.validate()?;

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ApiError::config("user_agent is not a valid header value"))?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, user_agent);
        default_headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("deflate"));
        default_headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            session,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the session state
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    // -------------------------------------------------------------------------
    // Session configuration
    // -------------------------------------------------------------------------

    /// Set the bearer token sent as `Authorization: Bearer <token>`
    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.session.set_bearer_token(token);
    }

    /// Set the user id used in request payloads
    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.session.set_user_id(user_id);
    }

    /// Set the currency code (kept as context, not sent)
    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.session.set_currency(currency);
    }

    /// Set the language tag (`xx-YY`) sent as `Accept-Language`
    ///
    /// Also derives the country code. Fails without touching the session if
    /// the tag has no hyphen.
    pub fn set_language(&mut self, tag: &str) -> ApiResult<()> {
        self.session.set_language(tag)
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access location endpoints
    #[must_use]
    pub fn location(&self) -> LocationApi<'_> {
        LocationApi::new(self)
    }

    /// Access order endpoints
    #[must_use]
    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    /// Access user endpoints
    #[must_use]
    pub fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// Access app bootstrap endpoints
    #[must_use]
    pub fn app(&self) -> AppApi<'_> {
        AppApi::new(self)
    }

    /// Access discover page endpoints
    #[must_use]
    pub fn discover(&self) -> DiscoverApi<'_> {
        DiscoverApi::new(self)
    }

    /// Access item endpoints
    #[must_use]
    pub fn items(&self) -> ItemsApi<'_> {
        ItemsApi::new(self)
    }

    /// Access store endpoints
    #[must_use]
    pub fn stores(&self) -> StoresApi<'_> {
        StoresApi::new(self)
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// POST a JSON body and decode the JSON response
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn post<T, B>(&self, suffix: &str, body: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request_builder(suffix).json(body);
        let response = Self::send(suffix, request).await?;
        Self::handle_response(response).await
    }

    /// POST with the payload as query parameters and decode the JSON response
    #[instrument(skip(self, query), fields(request_id))]
    pub async fn post_query<T, Q>(&self, suffix: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request_builder(suffix).query(query);
        let response = Self::send(suffix, request).await?;
        Self::handle_response(response).await
    }

    /// POST a JSON body and return only the HTTP status code
    ///
    /// Non-2xx statuses are returned as values, not errors.
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn post_status<B>(&self, suffix: &str, body: &B) -> ApiResult<u16>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request_builder(suffix).json(body);
        let response = Self::send(suffix, request).await?;
        Ok(response.status().as_u16())
    }

    /// Build a POST request for an endpoint suffix with the session headers
    pub fn request_builder(&self, suffix: &str) -> RequestBuilder {
        let url = self.config.endpoint_url(suffix);
        let mut request = self.inner.request(Method::POST, url);

        if let Some(authorization) = self.session.authorization() {
            request = request.header(AUTHORIZATION, authorization);
        }
        if let Some(language) = self.session.accept_language() {
            request = request.header(ACCEPT_LANGUAGE, language);
        }

        request
    }

    /// Send a prepared request, logging timing under a fresh request id
    async fn send(suffix: &str, request: RequestBuilder) -> ApiResult<Response> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let result = request.send().await;
        let elapsed = start.elapsed();

        match result {
            Ok(response) => {
                debug!(
                    request_id = %request_id,
                    endpoint = %suffix,
                    status = response.status().as_u16(),
                    elapsed_ms = elapsed.as_millis(),
                    "Request completed"
                );
                Ok(response)
            }
            Err(e) => {
                debug!(
                    request_id = %request_id,
                    endpoint = %suffix,
                    elapsed_ms = elapsed.as_millis(),
                    error = %e,
                    "Request failed"
                );
                Err(ApiError::Request(e))
            }
        }
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn header<'a>(request: &'a reqwest::Request, name: &str) -> Option<&'a str> {
        request.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn test_client_creation() {
        let client = TgtgClient::with_config(ClientConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://apptoogoodtogo.com/api");
        assert_eq!(client.session(), &Session::new());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig::default().with_timeout(Duration::ZERO);
        assert!(matches!(
            TgtgClient::with_config(config),
            Err(ApiError::Config(_))
        ));

        let config = ClientConfig::default().with_user_agent("bad\nagent");
        assert!(matches!(
            TgtgClient::with_config(config),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_request_builder_without_session() {
        let client = TgtgClient::with_config(ClientConfig::default()).unwrap();
        let request = client.request_builder("/app/v1/onStartup").build().unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.url().as_str(),
            "https://apptoogoodtogo.com/api/app/v1/onStartup"
        );
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_builder_applies_session_headers() {
        let mut client = TgtgClient::with_config(ClientConfig::default()).unwrap();
        client.set_bearer_token("abc");
        client.set_language("en-US").unwrap();

        let request = client.request_builder("/order/v6/active").build().unwrap();
        assert_eq!(header(&request, "authorization"), Some("Bearer abc"));
        assert_eq!(header(&request, "accept-language"), Some("en-US"));
    }

    #[test]
    fn test_setters_update_session() {
        let mut client = TgtgClient::with_config(ClientConfig::default()).unwrap();
        client.set_user_id("u1");
        client.set_currency("GBP");
        client.set_language("en-GB").unwrap();
        assert!(client.set_language("enGB").is_err());

        let session = client.session();
        assert_eq!(session.user_id(), Some("u1"));
        assert_eq!(session.currency(), Some("GBP"));
        assert_eq!(session.country_code(), Some("GB"));
    }

    #[test]
    fn test_with_session() {
        let session = Session::new().with_bearer_token("t").with_user_id("42");
        let client = TgtgClient::with_session(ClientConfig::default(), session.clone()).unwrap();
        assert_eq!(client.session(), &session);
    }
}
