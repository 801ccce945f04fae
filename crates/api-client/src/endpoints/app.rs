//! App bootstrap endpoints

use crate::client::TgtgClient;
use crate::error::ApiResult;
use crate::types::{EmptyBody, JsonResponse};

const ON_STARTUP: &str = "/app/v1/onStartup";

/// App API interface
#[derive(Clone, Copy)]
pub struct AppApi<'a> {
    client: &'a TgtgClient,
}

impl<'a> AppApi<'a> {
    /// Create a new app API interface
    pub(crate) fn new(client: &'a TgtgClient) -> Self {
        Self { client }
    }

    /// Get the information the app loads on startup
    ///
    /// POST /app/v1/onStartup
    pub async fn startup_info(&self) -> ApiResult<JsonResponse> {
        self.client.post(ON_STARTUP, &EmptyBody::default()).await
    }
}
