//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Anime card data (subset of the backend `Anime` entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeSummary {
    pub id: u64,
    pub title: String,
    pub synopsis: Option<String>,
    pub image: Option<String>,
}

/// Response of the `is-in-watchlist` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WatchlistStatus {
    #[serde(rename = "isInWatchlist")]
    pub is_in_watchlist: bool,
}

/// Request body for comment updates
#[derive(Debug, Serialize)]
pub struct CommentUpdate<'a> {
    pub content: &'a str,
}

/// Characters left alone by `encodeURIComponent`
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Catalogue search fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimeFilter {
    pub title: String,
    pub subtype: String,
    pub sort_by: String,
    pub status: String,
}

impl AnimeFilter {
    /// True when every field is empty; the catalogue then loads the unfiltered list
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.subtype.is_empty()
            && self.sort_by.is_empty()
            && self.status.is_empty()
    }

    /// Form-urlencoded query; all four keys are always sent, spaces become `+`
    pub fn query_string(&self) -> String {
        [
            ("title", &self.title),
            ("subtype", &self.subtype),
            ("sortBy", &self.sort_by),
            ("status", &self.status),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_value(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE)
        .to_string()
        .replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_anime() {
        let raw = r#"[
            {"id": 7, "title": "Cowboy Bebop", "synopsis": "Space bounty hunters.",
             "image": "https://media.kitsu.io/7.jpg", "subtype": "TV", "episodeCount": 26},
            {"id": 8, "title": "Untitled", "synopsis": null, "image": null}
        ]"#;
        let animes: Vec<AnimeSummary> = serde_json::from_str(raw).unwrap();
        assert_eq!(animes.len(), 2);
        assert_eq!(animes[0].id, 7);
        assert_eq!(animes[0].title, "Cowboy Bebop");
        assert_eq!(animes[1].synopsis, None);
        assert_eq!(animes[1].image, None);
    }

    #[test]
    fn decodes_watchlist_status() {
        let status: WatchlistStatus = serde_json::from_str(r#"{"isInWatchlist": true}"#).unwrap();
        assert!(status.is_in_watchlist);
    }

    #[test]
    fn comment_update_body() {
        let body = serde_json::to_string(&CommentUpdate { content: "Great show" }).unwrap();
        assert_eq!(body, r#"{"content":"Great show"}"#);
    }

    #[test]
    fn empty_filter() {
        assert!(AnimeFilter::default().is_empty());
        let filter = AnimeFilter { status: "finished".into(), ..Default::default() };
        assert!(!filter.is_empty());
    }

    #[test]
    fn query_keeps_every_key() {
        let filter = AnimeFilter { title: "naruto".into(), ..Default::default() };
        assert_eq!(filter.query_string(), "title=naruto&subtype=&sortBy=&status=");
    }

    #[test]
    fn query_encodes_like_a_form() {
        let filter = AnimeFilter {
            title: "Fullmetal Alchemist: Brotherhood".into(),
            subtype: "TV".into(),
            sort_by: "-averageRating".into(),
            status: "a&b=c+d".into(),
        };
        assert_eq!(
            filter.query_string(),
            "title=Fullmetal+Alchemist%3A+Brotherhood&subtype=TV&sortBy=-averageRating&status=a%26b%3Dc%2Bd"
        );
    }

    #[test]
    fn query_encodes_unicode() {
        let filter = AnimeFilter { title: "été".into(), ..Default::default() };
        assert!(filter.query_string().starts_with("title=%C3%A9t%C3%A9&"));
    }
}
