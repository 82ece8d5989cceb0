//! Comment Endpoints

use super::{execute, ApiRequest, Method, API_ROOT};
use crate::error::ApiError;
use crate::models::CommentUpdate;

fn comment_path(anime_id: &str, comment_id: &str) -> String {
    format!("{}/animes/{}/comments/{}", API_ROOT, anime_id, comment_id)
}

pub fn update_comment_request(anime_id: &str, comment_id: &str, content: &str) -> Result<ApiRequest, ApiError> {
    ApiRequest::new(Method::Put, comment_path(anime_id, comment_id)).with_json(&CommentUpdate { content })
}

pub fn delete_comment_request(anime_id: &str, comment_id: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, comment_path(anime_id, comment_id))
}

pub async fn update_comment(anime_id: &str, comment_id: &str, content: &str) -> Result<(), ApiError> {
    execute(&update_comment_request(anime_id, comment_id, content)?).await
}

pub async fn delete_comment(anime_id: &str, comment_id: &str) -> Result<(), ApiError> {
    execute(&delete_comment_request(anime_id, comment_id)).await
}
