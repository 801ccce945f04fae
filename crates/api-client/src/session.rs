//! Session state shared by every request
//!
//! A [`Session`] is owned by exactly one [`TgtgClient`](crate::TgtgClient) and
//! only changes through the client's `&mut self` setters. Request builders
//! read it to fill in the `Authorization` and `Accept-Language` headers and
//! the `user_id` payload fields.

use crate::error::{ApiError, ApiResult};
use std::env;
use std::fmt;
use std::str::FromStr;

/// A language tag of the form `xx-YY`, e.g. `en-GB`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    tag: String,
    country: String,
}

impl LanguageTag {
    /// Parse a tag, deriving the country code from its second segment
    pub fn parse(tag: &str) -> ApiResult<Self> {
        let mut segments = tag.split('-');
        let language = segments.next().unwrap_or_default();
        let country = segments.next().unwrap_or_default();

        if language.is_empty() || country.is_empty() {
            return Err(ApiError::InvalidLanguageTag(tag.to_string()));
        }

        Ok(Self {
            tag: tag.to_string(),
            country: country.to_string(),
        })
    }

    /// The full tag as given, e.g. `en-GB`
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// Country code, e.g. `GB`
    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country
    }
}

impl FromStr for LanguageTag {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

/// Mutable per-client session configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user_id: Option<String>,
    language: Option<LanguageTag>,
    currency: Option<String>,
}

impl Session {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a session from environment variables
    ///
    /// Reads `TGTG_ACCESS_TOKEN`, `TGTG_USER_ID`, `TGTG_LANGUAGE` and
    /// `TGTG_CURRENCY`. Missing variables leave the field unset; a malformed
    /// language tag is an error.
    pub fn from_env() -> ApiResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load a session from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> ApiResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut session = Self::new();
        if let Some(token) = lookup("TGTG_ACCESS_TOKEN") {
            session.set_bearer_token(token);
        }
        if let Some(user_id) = lookup("TGTG_USER_ID") {
            session.set_user_id(user_id);
        }
        if let Some(language) = lookup("TGTG_LANGUAGE") {
            session.set_language(&language)?;
        }
        if let Some(currency) = lookup("TGTG_CURRENCY") {
            session.set_currency(currency);
        }
        Ok(session)
    }

    /// Store the bearer token
    pub fn set_bearer_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Store the user id sent as `user_id`
    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.user_id = Some(user_id.into());
    }

    /// Store the currency code
    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = Some(currency.into());
    }

    /// Store the language tag and its country code
    ///
    /// On error the session is left as it was.
    pub fn set_language(&mut self, tag: &str) -> ApiResult<()> {
        self.language = Some(LanguageTag::parse(tag)?);
        Ok(())
    }

    /// Builder-style variant of [`set_bearer_token`](Self::set_bearer_token)
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.set_bearer_token(token);
        self
    }

    /// Builder-style variant of [`set_user_id`](Self::set_user_id)
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.set_user_id(user_id);
        self
    }

    /// Bearer token, if set
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// User id, if set
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Language tag, if set
    #[must_use]
    pub fn language(&self) -> Option<&LanguageTag> {
        self.language.as_ref()
    }

    /// Country code derived from the language tag
    #[must_use]
    pub fn country_code(&self) -> Option<&str> {
        self.language.as_ref().map(LanguageTag::country_code)
    }

    /// Currency code, if set
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.currency.as_deref()
    }

    /// Value of the `Authorization` header, `Bearer <token>`
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// Value of the `Accept-Language` header when a language was set
    #[must_use]
    pub fn accept_language(&self) -> Option<&str> {
        self.language.as_ref().map(LanguageTag::as_str)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("user_id", &self.user_id)
            .field("language", &self.accept_language())
            .field("currency", &self.currency)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_language_tag_parse() {
        let tag = LanguageTag::parse("en-GB").unwrap();
        assert_eq!(tag.as_str(), "en-GB");
        assert_eq!(tag.country_code(), "GB");
        assert_eq!(tag.to_string(), "en-GB");

        let tag: LanguageTag = "da-DK".parse().unwrap();
        assert_eq!(tag.country_code(), "DK");
    }

    #[test]
    fn test_language_tag_uses_second_segment() {
        let tag = LanguageTag::parse("zh-Hant-TW").unwrap();
        assert_eq!(tag.as_str(), "zh-Hant-TW");
        assert_eq!(tag.country_code(), "Hant");
    }

    #[test]
    fn test_language_tag_rejects_malformed() {
        for bad in ["", "en", "en-", "-GB", "-"] {
            assert!(
                matches!(LanguageTag::parse(bad), Err(ApiError::InvalidLanguageTag(t)) if t == bad),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn test_set_language_failure_keeps_previous() {
        let mut session = Session::new();
        session.set_language("en-GB").unwrap();

        assert!(session.set_language("english").is_err());
        assert_eq!(session.accept_language(), Some("en-GB"));
        assert_eq!(session.country_code(), Some("GB"));
    }

    #[test]
    fn test_empty_session() {
        let session = Session::new();
        assert_eq!(session.token(), None);
        assert_eq!(session.authorization(), None);
        assert_eq!(session.accept_language(), None);
        assert_eq!(session.country_code(), None);
        assert_eq!(session.user_id(), None);
        assert_eq!(session.currency(), None);
    }

    #[test]
    fn test_setters() {
        let mut session = Session::new().with_bearer_token("abc").with_user_id("u1");
        session.set_currency("DKK");

        assert_eq!(session.token(), Some("abc"));
        assert_eq!(session.authorization().as_deref(), Some("Bearer abc"));
        assert_eq!(session.user_id(), Some("u1"));
        assert_eq!(session.currency(), Some("DKK"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new().with_bearer_token("super-secret");
        let debug = format!("{session:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_from_lookup() {
        let session = Session::from_lookup(|key| match key {
            "TGTG_ACCESS_TOKEN" => Some("tok".to_string()),
            "TGTG_LANGUAGE" => Some("nl-NL".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(session.token(), Some("tok"));
        assert_eq!(session.country_code(), Some("NL"));
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_from_lookup_bad_language() {
        let result = Session::from_lookup(|key| {
            (key == "TGTG_LANGUAGE").then(|| "dutch".to_string())
        });
        assert!(matches!(result, Err(ApiError::InvalidLanguageTag(_))));
    }

    proptest! {
        #[test]
        fn prop_language_tag_derives_country(lang in "[a-z]{2}", country in "[A-Z]{2}") {
            let tag = format!("{lang}-{country}");
            let mut session = Session::new();
            session.set_language(&tag).unwrap();
            prop_assert_eq!(session.country_code(), Some(country.as_str()));
            prop_assert_eq!(session.accept_language(), Some(tag.as_str()));
        }

        #[test]
        fn prop_authorization_is_bearer_token(token in "[A-Za-z0-9._~+/=-]{0,64}") {
            let session = Session::new().with_bearer_token(token.clone());
            prop_assert_eq!(session.authorization(), Some(format!("Bearer {token}")));
        }
    }
}
