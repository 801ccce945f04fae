//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one area of the mobile app API.
//! Every method issues a single POST against `base_url + suffix`.
//!
//! ## Endpoint map
//!
//! | Module | Suffix | Description |
//! |--------|--------|-------------|
//! | `location` | `/location/v1/lookup` | Nearby merchants lookup |
//! | `orders` | `/order/v6/...` | Active orders, order detail, rating |
//! | `user` | `/user/v1/mePage` | Signed-in user page |
//! | `app` | `/app/v1/onStartup` | App bootstrap info |
//! | `discover` | `/discover/v1/...` | Discover page and bucket contents |
//! | `items` | `/item/v7/...`, `/manufactureritem/v1/` | Listings and item detail |
//! | `stores` | `/store/v4/{id}` | Store detail |

pub mod app;
pub mod discover;
pub mod items;
pub mod location;
pub mod orders;
pub mod stores;
pub mod user;

pub use app::AppApi;
pub use discover::{BucketParams, DiscoverApi, DiscoverParams};
pub use items::{ItemsApi, ItemsNearbyParams, ManufacturerItemsParams};
pub use location::LocationApi;
pub use orders::{OrderRating, OrdersApi, PositiveFeedback};
pub use stores::StoresApi;
pub use user::UserApi;
