//! Anime Endpoints

use super::{fetch_json, ApiRequest, Method, API_ROOT};
use crate::error::ApiError;
use crate::models::{AnimeFilter, AnimeSummary};

/// Unfiltered list when every field is empty, filtered query otherwise
pub fn list_animes_request(filter: &AnimeFilter) -> ApiRequest {
    if filter.is_empty() {
        ApiRequest::new(Method::Get, format!("{}/animes", API_ROOT))
    } else {
        ApiRequest::new(Method::Get, format!("{}/animes?{}", API_ROOT, filter.query_string()))
    }
}

pub async fn list_animes(filter: &AnimeFilter) -> Result<Vec<AnimeSummary>, ApiError> {
    fetch_json(&list_animes_request(filter)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_hits_plain_listing() {
        let req = list_animes_request(&AnimeFilter::default());
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.path, "/api/animes");
    }

    #[test]
    fn filter_builds_query() {
        let filter = AnimeFilter {
            subtype: "movie".into(),
            status: "finished".into(),
            ..Default::default()
        };
        let req = list_animes_request(&filter);
        assert_eq!(req.path, "/api/animes?title=&subtype=movie&sortBy=&status=finished");
    }
}
