//! Store endpoints

use crate::client::TgtgClient;
use crate::error::ApiResult;
use crate::types::{JsonResponse, Origin, OriginRequest};

/// Store API interface
#[derive(Clone, Copy)]
pub struct StoresApi<'a> {
    client: &'a TgtgClient,
}

impl<'a> StoresApi<'a> {
    /// Create a new stores API interface
    pub(crate) fn new(client: &'a TgtgClient) -> Self {
        Self { client }
    }

    /// Get store details as seen from a position
    ///
    /// POST /store/v4/{store_id}
    ///
    /// `store_id` is appended to the path as given.
    pub async fn info(
        &self,
        longitude: f64,
        latitude: f64,
        store_id: &str,
    ) -> ApiResult<JsonResponse> {
        let path = format!("/store/v4/{store_id}");
        let body = OriginRequest {
            user_id: self.client.session().user_id(),
            origin: Origin::new(longitude, latitude),
        };
        self.client.post(&path, &body).await
    }
}
