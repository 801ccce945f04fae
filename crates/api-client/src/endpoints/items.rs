//! Item endpoints
//!
//! - Search listings (surprise bags) around a position
//! - Get a single listing
//! - Browse the marketplace's own manufacturer items

use crate::client::TgtgClient;
use crate::error::ApiResult;
use crate::types::{JsonResponse, Origin, OriginRequest, DEFAULT_RADIUS};
use serde::Serialize;

const ITEMS: &str = "/item/v7/";
const MANUFACTURER_ITEMS: &str = "/manufactureritem/v1/";

/// User id the item search always sends, whatever the session holds
///
/// Kept for wire compatibility with the app build this client mimics.
pub const ITEM_SEARCH_USER_ID: &str = "1426427";

/// Page size of the item search
pub const ITEM_SEARCH_PAGE_SIZE: u32 = 400;

/// Default manufacturer items country
pub const DEFAULT_MANUFACTURER_COUNTRY: &str = "DK";

/// Default manufacturer items page size
pub const DEFAULT_MANUFACTURER_PAGE_SIZE: u32 = 50;

/// Items API interface
#[derive(Clone, Copy)]
pub struct ItemsApi<'a> {
    client: &'a TgtgClient,
}

impl<'a> ItemsApi<'a> {
    /// Create a new items API interface
    pub(crate) fn new(client: &'a TgtgClient) -> Self {
        Self { client }
    }

    /// Search items around a position (first page only)
    ///
    /// POST /item/v7/
    pub async fn nearby(&self, params: &ItemsNearbyParams) -> ApiResult<JsonResponse> {
        let body = ItemsNearbyRequest::from(params);
        self.client.post(ITEMS, &body).await
    }

    /// Get a single item as seen from a position
    ///
    /// POST /item/v7/{item_id}
    pub async fn info(
        &self,
        longitude: f64,
        latitude: f64,
        item_id: &str,
    ) -> ApiResult<JsonResponse> {
        let path = format!("/item/v7/{item_id}");
        let body = OriginRequest {
            user_id: self.client.session().user_id(),
            origin: Origin::new(longitude, latitude),
        };
        self.client.post(&path, &body).await
    }

    /// List manufacturer items for a country
    ///
    /// POST /manufactureritem/v1/
    pub async fn manufacturer(&self, params: &ManufacturerItemsParams) -> ApiResult<JsonResponse> {
        let body = ManufacturerItemsRequest {
            page: params.page,
            page_size: params.page_size,
            user_id: self.client.session().user_id(),
            country_id: &params.country_id,
        };
        self.client.post(MANUFACTURER_ITEMS, &body).await
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Parameters for the item search
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsNearbyParams {
    /// Caller position
    pub origin: Origin,
    /// Search radius
    pub radius: u32,
    /// Only return items with stock left
    pub stock_only: bool,
}

impl ItemsNearbyParams {
    /// Create params with the default radius, including sold-out items
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            origin: Origin::new(longitude, latitude),
            radius: DEFAULT_RADIUS,
            stock_only: false,
        }
    }

    /// Set the search radius
    #[must_use]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Only return items in stock
    #[must_use]
    pub fn with_stock_only(mut self, stock_only: bool) -> Self {
        self.stock_only = stock_only;
        self
    }
}

/// Parameters for manufacturer items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManufacturerItemsParams {
    /// Country code, e.g. `DK`
    pub country_id: String,
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub page_size: u32,
}

impl Default for ManufacturerItemsParams {
    fn default() -> Self {
        Self {
            country_id: DEFAULT_MANUFACTURER_COUNTRY.to_string(),
            page: 1,
            page_size: DEFAULT_MANUFACTURER_PAGE_SIZE,
        }
    }
}

impl ManufacturerItemsParams {
    /// Create params with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the country
    #[must_use]
    pub fn with_country(mut self, country_id: impl Into<String>) -> Self {
        self.country_id = country_id.into();
        self
    }

    /// Set page and page size
    #[must_use]
    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

// ============================================================================
// Request Types
// ============================================================================

/// Item search body
#[derive(Debug, Clone, Serialize)]
pub struct ItemsNearbyRequest {
    pub radius: u32,
    pub discover: bool,
    pub user_id: &'static str,
    pub favorites_only: bool,
    pub item_categories: &'static [&'static str],
    pub origin: Origin,
    pub diet_categories: &'static [&'static str],
    pub hidden_only: bool,
    pub page_size: u32,
    pub with_stock_only: bool,
    pub we_care_only: bool,
    pub page: u32,
}

impl From<&ItemsNearbyParams> for ItemsNearbyRequest {
    fn from(params: &ItemsNearbyParams) -> Self {
        Self {
            radius: params.radius,
            discover: false,
            user_id: ITEM_SEARCH_USER_ID,
            favorites_only: false,
            item_categories: &[],
            origin: params.origin,
            diet_categories: &[],
            hidden_only: false,
            page_size: ITEM_SEARCH_PAGE_SIZE,
            with_stock_only: params.stock_only,
            we_care_only: false,
            page: 1,
        }
    }
}

/// Manufacturer items body
#[derive(Debug, Clone, Serialize)]
pub struct ManufacturerItemsRequest<'a> {
    pub page: u32,
    pub page_size: u32,
    pub user_id: Option<&'a str>,
    pub country_id: &'a str,
}
