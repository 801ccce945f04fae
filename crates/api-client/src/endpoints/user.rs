//! User endpoints

use crate::client::TgtgClient;
use crate::error::ApiResult;
use crate::types::JsonResponse;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::Serialize;

const ME_PAGE: &str = "/user/v1/mePage";

/// User API interface
#[derive(Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a TgtgClient,
}

impl<'a> UserApi<'a> {
    /// Create a new user API interface
    pub(crate) fn new(client: &'a TgtgClient) -> Self {
        Self { client }
    }

    /// Get the active user page
    ///
    /// POST /user/v1/mePage?localtime=..&user_id=..
    ///
    /// The payload goes in the query string; the body is empty. `localtime` is
    /// the local wall-clock time at the moment of the call.
    pub async fn me_page(&self) -> ApiResult<JsonResponse> {
        let query = MePageQuery {
            localtime: format_localtime(Local::now().naive_local()),
            user_id: self.client.session().user_id(),
        };
        self.client.post_query(ME_PAGE, &query).await
    }
}

/// Query parameters of the user page request
#[derive(Debug, Clone, Serialize)]
pub struct MePageQuery<'a> {
    /// Local time, `YYYY-MM-DD HH:MM:SS[.ffffff]`
    pub localtime: String,
    /// Session user id, omitted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<&'a str>,
}

/// Render a local timestamp the way the app sends it
///
/// Microseconds are always six digits, and dropped entirely on a whole second.
#[must_use]
pub fn format_localtime(time: NaiveDateTime) -> String {
    if time.nanosecond() / 1_000 == 0 {
        time.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        time.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_localtime() {
        let time = NaiveDate::from_ymd_opt(2023, 2, 14)
            .unwrap()
            .and_hms_micro_opt(18, 5, 9, 42)
            .unwrap();
        assert_eq!(format_localtime(time), "2023-02-14 18:05:09.000042");
    }

    #[test]
    fn test_format_localtime_whole_second() {
        let time = NaiveDate::from_ymd_opt(2023, 2, 14)
            .unwrap()
            .and_hms_opt(18, 5, 9)
            .unwrap();
        assert_eq!(format_localtime(time), "2023-02-14 18:05:09");
    }

    #[test]
    fn test_query_skips_unset_user_id() {
        let query = MePageQuery {
            localtime: "2023-02-14 18:05:09.000042".to_string(),
            user_id: None,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert!(json.get("user_id").is_none());
        assert_eq!(json["localtime"], "2023-02-14 18:05:09.000042");
    }
}
