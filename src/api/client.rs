use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{NewPost, Post, PostId};
use crate::config::ApiConfig;

/// The four remote operations the client needs.
///
/// Implementations perform no retries: every failure is returned as-is.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// `GET /posts`
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// `POST /posts` with a JSON body.
    async fn create_post(&self, fields: NewPost) -> Result<Post, ApiError>;

    /// `GET /posts/:id`
    async fn get_post(&self, id: &PostId) -> Result<Post, ApiError>;

    /// `DELETE /posts/:id`
    async fn delete_post(&self, id: &PostId) -> Result<(), ApiError>;
}

/// `PostsApi` over HTTP against `<base_url>/posts[/:id]?key=<key>`.
pub struct HttpPostsClient {
    client: Client,
    base_url: Url,
    key: String,
}

impl HttpPostsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| ApiError::InvalidRequest(format!("base URL: {}", e)))?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            key: config.key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `<base>/posts[/<id>]?key=<key>`, escaping the id as a path segment.
    fn posts_url(&self, id: Option<&PostId>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::InvalidRequest(format!("base URL '{}' cannot hold a path", self.base_url))
            })?;
            segments.pop_if_empty().push("posts");
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        url.query_pairs_mut().append_pair("key", &self.key);
        Ok(url)
    }

    fn request(&self, method: Method, id: Option<&PostId>) -> Result<RequestBuilder, ApiError> {
        let url = self.posts_url(id)?;
        tracing::debug!(method = %method, path = url.path(), "posts request");
        Ok(self.client.request(method, url))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("posts request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "posts request rejected");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl PostsApi for HttpPostsClient {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let request = self.request(Method::GET, None)?;
        self.send_json(request).await
    }

    async fn create_post(&self, fields: NewPost) -> Result<Post, ApiError> {
        let request = self.request(Method::POST, None)?.json(&fields);
        self.send_json(request).await
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, ApiError> {
        let request = self.request(Method::GET, Some(id))?;
        self.send_json(request).await
    }

    async fn delete_post(&self, id: &PostId) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, Some(id))?;
        self.send(request).await?;
        Ok(())
    }
}
