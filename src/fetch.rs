//! Remote posts feed for the data page.

use thiserror::Error;

use crate::store::data::Post;

/// The placeholder API the data page loads from. Read-only, no auth.
pub const POSTS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// The message shown for any failed load, whatever the underlying cause.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),
}

/// One GET against the posts endpoint. Non-2xx statuses are errors even
/// though reqwest would happily hand back their bodies.
pub async fn fetch_posts(client: &reqwest::Client) -> Result<Vec<Post>, FetchError> {
    let response = client.get(POSTS_ENDPOINT).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.json().await?)
}
