//! Optional request parameters.
//!
//! Every read operation takes a slice of [`RequestOption`]s. They are applied
//! in order to a [`RequestParams`] bag; when two options touch the same key the
//! later one wins. Options that aren't passed leave their key unset so the
//! server default applies.
//!
//! ```ignore
//! use spotify_client::options::{fields, limit, country};
//!
//! let page = playlists
//!     .get_playlist_tracks(&id, &[limit(20), country("SE"), fields("items(track(name))")])
//!     .await?;
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// Content types that may be requested alongside tracks in playlist items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdditionalType {
    Episode,
    Track,
}

impl AdditionalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdditionalType::Episode => "episode",
            AdditionalType::Track => "track",
        }
    }
}

impl fmt::Display for AdditionalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mutable parameter bag options are applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    query: BTreeMap<&'static str, String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a query parameter, replacing any previous value.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.query.insert(key, value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Apply options in order on top of the current values.
    pub fn apply(mut self, options: &[RequestOption]) -> Self {
        for option in options {
            option.apply(&mut self);
        }
        self
    }

    /// Query pairs in key order, ready for `reqwest::RequestBuilder::query`.
    pub fn to_query(&self) -> Vec<(&'static str, &str)> {
        self.query.iter().map(|(k, v)| (*k, v.as_str())).collect()
    }
}

/// A single optional modifier for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOption {
    /// ISO 3166-1 alpha-2 country code
    Country(String),
    /// Language/country pair such as `es_MX`
    Locale(String),
    /// Field projection, e.g. `items(track(name,href))`
    Fields(String),
    /// Market used for track relinking
    Market(String),
    /// ISO 8601 timestamp used by featured playlists
    Timestamp(String),
    Limit(u32),
    Offset(u32),
    AdditionalTypes(Vec<AdditionalType>),
}

impl RequestOption {
    pub fn apply(&self, params: &mut RequestParams) {
        match self {
            RequestOption::Country(code) => params.set("country", code.as_str()),
            RequestOption::Locale(locale) => params.set("locale", locale.as_str()),
            RequestOption::Fields(fields) => params.set("fields", fields.as_str()),
            RequestOption::Market(market) => params.set("market", market.as_str()),
            RequestOption::Timestamp(ts) => params.set("timestamp", ts.as_str()),
            RequestOption::Limit(limit) => params.set("limit", limit.to_string()),
            RequestOption::Offset(offset) => params.set("offset", offset.to_string()),
            RequestOption::AdditionalTypes(types) => {
                params.set("additional_types", join_types(types));
            }
        }
    }
}

pub(crate) fn join_types(types: &[AdditionalType]) -> String {
    types
        .iter()
        .map(AdditionalType::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn country(code: impl Into<String>) -> RequestOption {
    RequestOption::Country(code.into())
}

pub fn locale(locale: impl Into<String>) -> RequestOption {
    RequestOption::Locale(locale.into())
}

/// Restrict the response to the given fields.
///
/// Fields left out of the projection decode as their zero value.
pub fn fields(fields: impl Into<String>) -> RequestOption {
    RequestOption::Fields(fields.into())
}

pub fn market(market: impl Into<String>) -> RequestOption {
    RequestOption::Market(market.into())
}

pub fn timestamp(ts: impl Into<String>) -> RequestOption {
    RequestOption::Timestamp(ts.into())
}

pub fn limit(limit: u32) -> RequestOption {
    RequestOption::Limit(limit)
}

pub fn offset(offset: u32) -> RequestOption {
    RequestOption::Offset(offset)
}

pub fn additional_types(types: impl IntoIterator<Item = AdditionalType>) -> RequestOption {
    RequestOption::AdditionalTypes(types.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_options_leaves_bag_empty() {
        let params = RequestParams::new().apply(&[]);
        assert!(params.is_empty());
        assert!(params.to_query().is_empty());
    }

    #[test]
    fn test_options_map_to_query_keys() {
        let params = RequestParams::new().apply(&[
            country("SE"),
            locale("sv_SE"),
            fields("href,name"),
            limit(20),
            offset(40),
        ]);

        assert_eq!(params.get("country"), Some("SE"));
        assert_eq!(params.get("locale"), Some("sv_SE"));
        assert_eq!(params.get("fields"), Some("href,name"));
        assert_eq!(params.get("limit"), Some("20"));
        assert_eq!(params.get("offset"), Some("40"));
        assert_eq!(params.get("market"), None);
    }

    #[test]
    fn test_later_option_wins() {
        let params = RequestParams::new().apply(&[limit(10), country("US"), limit(50)]);
        assert_eq!(params.get("limit"), Some("50"));
        assert_eq!(params.get("country"), Some("US"));
    }

    #[test]
    fn test_caller_overrides_seeded_default() {
        let mut params = RequestParams::new();
        params.set(
            "additional_types",
            join_types(&[AdditionalType::Episode, AdditionalType::Track]),
        );
        assert_eq!(params.get("additional_types"), Some("episode,track"));

        let params = params.apply(&[additional_types([AdditionalType::Episode])]);
        assert_eq!(params.get("additional_types"), Some("episode"));
    }

    #[test]
    fn test_query_is_key_ordered() {
        let params = RequestParams::new().apply(&[offset(5), country("DE"), limit(1)]);
        assert_eq!(
            params.to_query(),
            vec![("country", "DE"), ("limit", "1"), ("offset", "5")]
        );
    }
}
