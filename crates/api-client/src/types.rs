//! Wire types shared across endpoint groups

use serde::{Deserialize, Serialize};

/// Default search radius of location-scoped listings
pub const DEFAULT_RADIUS: u32 = 10;

/// Decoded response body, passed through without a schema
pub type JsonResponse = serde_json::Value;

/// Geographic coordinate pair scoping location-based queries
///
/// Serialized as `{"longitude": .., "latitude": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
}

impl Origin {
    /// Create an origin; note the longitude-first argument order
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Empty JSON object body, `{}`
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EmptyBody {}

/// Body carrying only the session user id
#[derive(Debug, Clone, Serialize)]
pub struct UserRequest<'a> {
    /// Session user id, `null` when unset
    pub user_id: Option<&'a str>,
}

/// Body for detail lookups scoped to the caller's position
#[derive(Debug, Clone, Serialize)]
pub struct OriginRequest<'a> {
    /// Session user id, `null` when unset
    pub user_id: Option<&'a str>,
    /// Caller position
    pub origin: Origin,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_origin_field_order() {
        let body = serde_json::to_string(&Origin::new(1.0, 2.0)).unwrap();
        assert_eq!(body, r#"{"longitude":1.0,"latitude":2.0}"#);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(serde_json::to_string(&EmptyBody::default()).unwrap(), "{}");
    }

    #[test]
    fn test_unset_user_id_is_null() {
        let body = serde_json::to_value(UserRequest { user_id: None }).unwrap();
        assert_eq!(body, json!({ "user_id": null }));
    }

    #[test]
    fn test_origin_request() {
        let body = serde_json::to_value(OriginRequest {
            user_id: Some("u1"),
            origin: Origin::new(1.0, 2.0),
        })
        .unwrap();
        assert_eq!(
            body,
            json!({ "user_id": "u1", "origin": { "longitude": 1.0, "latitude": 2.0 } })
        );
    }
}
