use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Payload for creating a post.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

/// A post as returned by the service. Fields other than `id` are opaque
/// pass-through values that are never interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(rename = "userId", default)]
    pub user_id: u32,
}

/// Client for the remote posts API.
pub struct PostsClient {
    base_url: String,
    client: reqwest::Client,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("postprobe/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a new post and return the parsed response body.
    pub async fn create_post(&self, payload: &NewPost) -> Result<Post, ApiError> {
        info!("attempting to create new post");
        match self.try_create(payload).await {
            Ok(post) => {
                info!("successfully created post with id {}", post.id);
                Ok(post)
            }
            Err(e) => {
                error!("failed to create post: {e}");
                Err(e)
            }
        }
    }

    async fn try_create(&self, payload: &NewPost) -> Result<Post, ApiError> {
        let response = self
            .client
            .post(format!("{}/posts", self.base_url))
            .header(reqwest::header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(serde_json::to_string(payload)?)
            .send()
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch the current state of a post. The content is returned raw; the
    /// caller only logs it.
    pub async fn get_post(&self, id: u64) -> Result<Value, ApiError> {
        info!("fetching post details for id {id}");
        match self.try_get(id).await {
            Ok(body) => {
                info!("successfully retrieved post details: {body}");
                Ok(body)
            }
            Err(e) => {
                error!("failed to fetch post {id}: {e}");
                Err(e)
            }
        }
    }

    async fn try_get(&self, id: u64) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(format!("{}/posts/{}", self.base_url, id))
            .send()
            .await?;
        let response = error_for_status(response).await?;
        Ok(response.json().await?)
    }

    /// Delete a post. Returns `Ok(true)` on a success status; every failure
    /// is an `Err`, so the flag is never `false`.
    pub async fn delete_post(&self, id: u64) -> Result<bool, ApiError> {
        info!("attempting to delete post with id {id}");
        match self.try_delete(id).await {
            Ok(()) => {
                info!("successfully deleted post {id}");
                Ok(true)
            }
            Err(e) => {
                error!("failed to delete post {id}: {e}");
                Err(e)
            }
        }
    }

    async fn try_delete(&self, id: u64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/posts/{}", self.base_url, id))
            .send()
            .await?;
        error_for_status(response).await?;
        Ok(())
    }
}

/// Turn a 4xx/5xx response into an `ApiError::Status` carrying the body.
async fn error_for_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status, url, body });
    }
    Ok(response)
}
