//! Discover page endpoints
//!
//! The discover page is made of buckets (carousels of listings, banners,
//! stores). The client advertises which bucket and display types it can
//! render, then pages through individual buckets.

use crate::client::TgtgClient;
use crate::error::ApiResult;
use crate::types::{JsonResponse, Origin, DEFAULT_RADIUS};
use serde::Serialize;

const DISCOVER: &str = "/discover/v1/";
const BUCKET: &str = "/discover/v1/bucket";

/// Default bucket page size
pub const DEFAULT_BUCKET_PAGE_SIZE: u32 = 100;

/// Default bucket filler type
pub const DEFAULT_BUCKET_TYPE: &str = "Favorites";

/// Bucket and display types the app build supports
pub const SUPPORTED_BUCKETS: &[SupportedBucket] = &[
    SupportedBucket {
        bucket_type: "ACTION",
        display_types: &[
            "CAROUSEL",
            "DONATION",
            "HOW_IT_WORKS",
            "JOB_APPLICATION",
            "MANAGE_PREFERENCES",
            "ENABLE_PREFERENCES",
            "CHALLENGE",
            "RATE_ORDER",
        ],
    },
    SupportedBucket {
        bucket_type: "HEADER",
        display_types: &["SOLD_OUT", "ALMOST_SOLD_OUT", "NOTHING_NEARBY", "NOT_LIVE_HERE"],
    },
    SupportedBucket {
        bucket_type: "ITEM",
        display_types: &[
            "CATEGORY",
            "CLASSIC",
            "FAVORITES",
            "RECOMMENDATIONS",
            "PREFERENCES",
            "CHARITY",
        ],
    },
    SupportedBucket {
        bucket_type: "STORE",
        display_types: &["LOGO_ONLY"],
    },
];

/// Discover API interface
#[derive(Clone, Copy)]
pub struct DiscoverApi<'a> {
    client: &'a TgtgClient,
}

impl<'a> DiscoverApi<'a> {
    /// Create a new discover API interface
    pub(crate) fn new(client: &'a TgtgClient) -> Self {
        Self { client }
    }

    /// Get the discover page around a position
    ///
    /// POST /discover/v1/
    pub async fn page(&self, params: &DiscoverParams) -> ApiResult<JsonResponse> {
        let body = DiscoverRequest::new(params, self.client.session().user_id());
        self.client.post(DISCOVER, &body).await
    }

    /// Get one page of a bucket's contents
    ///
    /// POST /discover/v1/bucket
    pub async fn bucket(&self, params: &BucketParams) -> ApiResult<JsonResponse> {
        let body = BucketRequest::new(params, self.client.session().user_id());
        self.client.post(BUCKET, &body).await
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Parameters for the discover page
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoverParams {
    /// Caller position
    pub origin: Origin,
    /// Search radius
    pub radius: u32,
}

impl DiscoverParams {
    /// Create params with the default radius
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            origin: Origin::new(longitude, latitude),
            radius: DEFAULT_RADIUS,
        }
    }

    /// Set the search radius
    #[must_use]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }
}

/// Parameters for a bucket page
#[derive(Debug, Clone, PartialEq)]
pub struct BucketParams {
    /// Caller position
    pub origin: Origin,
    /// Search radius
    pub radius: u32,
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub page_size: u32,
    /// Bucket filler type, e.g. `Favorites`
    pub bucket_type: String,
}

impl BucketParams {
    /// Create params for the first page of the favorites bucket
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            origin: Origin::new(longitude, latitude),
            radius: DEFAULT_RADIUS,
            page: 1,
            page_size: DEFAULT_BUCKET_PAGE_SIZE,
            bucket_type: DEFAULT_BUCKET_TYPE.to_string(),
        }
    }

    /// Set the search radius
    #[must_use]
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set page and page size
    #[must_use]
    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Set the bucket filler type
    #[must_use]
    pub fn with_bucket_type(mut self, bucket_type: impl Into<String>) -> Self {
        self.bucket_type = bucket_type.into();
        self
    }
}

// ============================================================================
// Request Types
// ============================================================================

/// One entry of the supported bucket taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedBucket {
    /// Bucket kind
    #[serde(rename = "type")]
    pub bucket_type: &'static str,
    pub display_types: &'static [&'static str],
}

/// Discover page body
#[derive(Debug, Clone, Serialize)]
pub struct DiscoverRequest<'a> {
    pub experimental_group: &'static str,
    pub debug_mode: bool,
    pub user_id: Option<&'a str>,
    pub supported_buckets: &'static [SupportedBucket],
    pub origin: Origin,
    pub radius: u32,
}

impl<'a> DiscoverRequest<'a> {
    /// Build the body from params and the session user id
    #[must_use]
    pub fn new(params: &DiscoverParams, user_id: Option<&'a str>) -> Self {
        Self {
            experimental_group: "Default",
            debug_mode: false,
            user_id,
            supported_buckets: SUPPORTED_BUCKETS,
            origin: params.origin,
            radius: params.radius,
        }
    }
}

/// Paging block of a bucket request
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Paging {
    pub size: u32,
    pub page: u32,
}

/// Bucket selector of a bucket request
#[derive(Debug, Clone, Serialize)]
pub struct BucketSelector<'a> {
    pub filler_type: &'a str,
}

/// Bucket contents body
#[derive(Debug, Clone, Serialize)]
pub struct BucketRequest<'a> {
    pub paging: Paging,
    pub user_id: Option<&'a str>,
    pub bucket: BucketSelector<'a>,
    pub origin: Origin,
    pub radius: u32,
}

impl<'a> BucketRequest<'a> {
    /// Build the body from params and the session user id
    #[must_use]
    pub fn new(params: &'a BucketParams, user_id: Option<&'a str>) -> Self {
        Self {
            paging: Paging {
                size: params.page_size,
                page: params.page,
            },
            user_id,
            bucket: BucketSelector {
                filler_type: &params.bucket_type,
            },
            origin: params.origin,
            radius: params.radius,
        }
    }
}
