//! Site Configuration
//!
//! Page sizes, thresholds and labels used by the components. Defaults match
//! the server templates; a page may override any of them with an embedded
//! `<script type="application/json" id="site-config">` block.

use serde::Deserialize;
use web_sys::HtmlScriptElement;

use crate::console;
use crate::dom;

/// Id of the optional JSON override block
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Carousel behaviour on the home page
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    pub autoplay_ms: u32,
    pub dots: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides_to_show: 3,
            slides_to_scroll: 3,
            autoplay_ms: 15_000,
            dots: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Where anonymous users are sent when they try to use the watchlist
    pub login_path: String,
    pub catalogue_page_size: usize,
    pub watchlist_page_size: usize,
    /// Synopsis blocks longer than this many characters get truncated
    pub synopsis_limit: usize,
    pub details_label: String,
    pub collapse_label: String,
    pub carousel: CarouselConfig,
    /// Enables `[TAG] debug` console lines
    pub debug: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            catalogue_page_size: 12,
            watchlist_page_size: 10,
            synopsis_limit: 100,
            details_label: "Details >>".to_string(),
            collapse_label: "<< Collapse".to_string(),
            carousel: CarouselConfig::default(),
            debug: false,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the override block from the page, falling back to defaults.
    pub fn load() -> Self {
        let raw = dom::by_id::<HtmlScriptElement>(CONFIG_ELEMENT_ID).and_then(|script| script.text().ok());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(err) => {
                    console::error("CONFIG", &format!("Ignoring malformed site config: {}", err));
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_templates() {
        let config = SiteConfig::default();
        assert_eq!(config.catalogue_page_size, 12);
        assert_eq!(config.watchlist_page_size, 10);
        assert_eq!(config.synopsis_limit, 100);
        assert_eq!(config.carousel.slides_to_show, 3);
        assert_eq!(config.carousel.slides_to_scroll, 3);
        assert_eq!(config.carousel.autoplay_ms, 15_000);
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{"watchlistPageSize": 20, "detailsLabel": "Détails >>", "carousel": {"autoplayMs": 5000}}"#,
        )
        .unwrap();
        assert_eq!(config.watchlist_page_size, 20);
        assert_eq!(config.details_label, "Détails >>");
        assert_eq!(config.carousel.autoplay_ms, 5000);
        assert_eq!(config.carousel.slides_to_show, 3);
        assert_eq!(config.catalogue_page_size, 12);
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(SiteConfig::from_json("{not json").is_err());
    }
}
