//! Location endpoints

use crate::client::TgtgClient;
use crate::error::ApiResult;
use crate::types::JsonResponse;
use serde::Serialize;

const LOOKUP: &str = "/location/v1/lookup";

/// Location API interface
#[derive(Clone, Copy)]
pub struct LocationApi<'a> {
    client: &'a TgtgClient,
}

impl<'a> LocationApi<'a> {
    /// Create a new location API interface
    pub(crate) fn new(client: &'a TgtgClient) -> Self {
        Self { client }
    }

    /// Look up restaurants near a position
    ///
    /// POST /location/v1/lookup
    pub async fn nearby_restaurants(&self, latitude: f64, longitude: f64) -> ApiResult<JsonResponse> {
        let body = LookupRequest {
            latitude,
            longitude,
        };
        self.client.post(LOOKUP, &body).await
    }
}

/// Nearby lookup body; unlike most endpoints this one is latitude-first
#[derive(Debug, Clone, Serialize)]
pub struct LookupRequest {
    pub latitude: f64,
    pub longitude: f64,
}
