//! Watchlist Endpoints
//!
//! Membership lookup and add/remove for a (user, anime) pair.

use super::{execute, fetch_json, ApiRequest, Method, API_ROOT};
use crate::error::ApiError;
use crate::models::WatchlistStatus;

fn watchlist_path(user_id: &str, action: &str, anime_id: &str) -> String {
    format!("{}/users/{}/watchlist/{}/{}", API_ROOT, user_id, action, anime_id)
}

pub fn is_in_watchlist_request(user_id: &str, anime_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Get, watchlist_path(user_id, "is-in-watchlist", anime_id))
}

pub fn add_anime_request(user_id: &str, anime_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Post, watchlist_path(user_id, "add-anime", anime_id))
}

pub fn remove_anime_request(user_id: &str, anime_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, watchlist_path(user_id, "remove-anime", anime_id))
}

pub async fn is_in_watchlist(user_id: &str, anime_id: &str) -> Result<bool, ApiError> {
    let status: WatchlistStatus = fetch_json(&is_in_watchlist_request(user_id, anime_id)).await?;
    Ok(status.is_in_watchlist)
}

pub async fn add_anime(user_id: &str, anime_id: &str) -> Result<(), ApiError> {
    execute(&add_anime_request(user_id, anime_id)).await
}

pub async fn remove_anime(user_id: &str, anime_id: &str) -> Result<(), ApiError> {
    execute(&remove_anime_request(user_id, anime_id)).await
}
