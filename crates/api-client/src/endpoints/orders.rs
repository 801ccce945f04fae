//! Order endpoints
//!
//! - List the signed-in user's active orders
//! - Fetch a single order
//! - Rate a redeemed order

use crate::client::TgtgClient;
use crate::error::ApiResult;
use crate::types::{EmptyBody, JsonResponse, UserRequest};
use serde::{Deserialize, Serialize};
use std::fmt;

const ACTIVE: &str = "/order/v6/active";

/// Order API interface
#[derive(Clone, Copy)]
pub struct OrdersApi<'a> {
    client: &'a TgtgClient,
}

impl<'a> OrdersApi<'a> {
    /// Create a new orders API interface
    pub(crate) fn new(client: &'a TgtgClient) -> Self {
        Self { client }
    }

    /// List active orders of the session user
    ///
    /// POST /order/v6/active
    pub async fn active(&self) -> ApiResult<JsonResponse> {
        let body = UserRequest {
            user_id: self.client.session().user_id(),
        };
        self.client.post(ACTIVE, &body).await
    }

    /// Get a single order
    ///
    /// POST /order/v6/{order_id}
    pub async fn info(&self, order_id: &str) -> ApiResult<JsonResponse> {
        let path = format!("/order/v6/{order_id}");
        self.client.post(&path, &EmptyBody::default()).await
    }

    /// Rate an order and return the HTTP status code
    ///
    /// POST /order/v6/{order_id}/rate
    ///
    /// Known statuses: `200` rated, `403` order not redeemed yet. Any status
    /// is returned as-is rather than turned into an error.
    pub async fn rate(&self, order_id: &str, rating: &OrderRating) -> ApiResult<u16> {
        let path = format!("/order/v6/{order_id}/rate");
        self.client.post_status(&path, rating).await
    }
}

// ============================================================================
// Request Types
// ============================================================================

/// Score wrapper, serialized as `{"score": n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub score: i32,
}

/// Rating body for a redeemed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRating {
    /// Overall score
    pub overall: Score,
    /// Positive feedback tags
    pub positive_feedback: Vec<PositiveFeedback>,
    /// Score for the bag content
    pub bag_content: Score,
    /// Score for the store's service
    pub service: Score,
}

impl OrderRating {
    /// Create a rating without feedback tags
    #[must_use]
    pub fn new(overall: i32, content: i32, service: i32) -> Self {
        Self {
            overall: Score { score: overall },
            positive_feedback: Vec::new(),
            bag_content: Score { score: content },
            service: Score { score: service },
        }
    }

    /// Add a feedback tag
    #[must_use]
    pub fn with_feedback(mut self, feedback: impl Into<PositiveFeedback>) -> Self {
        self.positive_feedback.push(feedback.into());
        self
    }
}

/// Positive feedback tag attached to a rating
///
/// The server's full set of tags is not published, so unknown values are
/// carried through [`PositiveFeedback::Other`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PositiveFeedback {
    /// `PositiveFeedback_friendly_staff`
    FriendlyStaff,
    /// `PositiveFeedback_delicious_food`
    DeliciousFood,
    /// `PositiveFeedback_quick_collection`
    QuickCollection,
    /// Any other tag
    Other(String),
}

impl PositiveFeedback {
    /// Wire value of the tag
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::FriendlyStaff => "PositiveFeedback_friendly_staff",
            Self::DeliciousFood => "PositiveFeedback_delicious_food",
            Self::QuickCollection => "PositiveFeedback_quick_collection",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for PositiveFeedback {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "PositiveFeedback_friendly_staff" => Self::FriendlyStaff,
            "PositiveFeedback_delicious_food" => Self::DeliciousFood,
            "PositiveFeedback_quick_collection" => Self::QuickCollection,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for PositiveFeedback {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<PositiveFeedback> for String {
    fn from(feedback: PositiveFeedback) -> Self {
        match feedback {
            PositiveFeedback::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PositiveFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rating_body() {
        let rating = OrderRating::new(5, 4, 3)
            .with_feedback(PositiveFeedback::FriendlyStaff)
            .with_feedback("PositiveFeedback_quick_collection");

        assert_eq!(
            serde_json::to_value(&rating).unwrap(),
            json!({
                "overall": { "score": 5 },
                "positive_feedback": [
                    "PositiveFeedback_friendly_staff",
                    "PositiveFeedback_quick_collection"
                ],
                "bag_content": { "score": 4 },
                "service": { "score": 3 }
            })
        );
    }

    #[test]
    fn test_feedback_known_tags() {
        assert_eq!(
            PositiveFeedback::from("PositiveFeedback_delicious_food"),
            PositiveFeedback::DeliciousFood
        );
        assert_eq!(
            PositiveFeedback::QuickCollection.to_string(),
            "PositiveFeedback_quick_collection"
        );
    }

    #[test]
    fn test_feedback_unknown_tag_passes_through() {
        let tag = PositiveFeedback::from("PositiveFeedback_great_value");
        assert_eq!(tag, PositiveFeedback::Other("PositiveFeedback_great_value".to_string()));

        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r#""PositiveFeedback_great_value""#);

        let back: PositiveFeedback = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }
}
