//! A `PostsApi` that fails every call, for unit tests that never settle
//! their actions.

use async_trait::async_trait;

use crate::api::{ApiError, NewPost, Post, PostId, PostsApi};

pub(crate) struct OfflineApi;

fn offline() -> ApiError {
    ApiError::Network {
        message: "offline".to_string(),
    }
}

#[async_trait]
impl PostsApi for OfflineApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        Err(offline())
    }

    async fn create_post(&self, _fields: NewPost) -> Result<Post, ApiError> {
        Err(offline())
    }

    async fn get_post(&self, _id: &PostId) -> Result<Post, ApiError> {
        Err(offline())
    }

    async fn delete_post(&self, _id: &PostId) -> Result<(), ApiError> {
        Err(offline())
    }
}
