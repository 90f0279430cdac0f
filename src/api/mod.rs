//! Remote resource client for the posts service.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod offline;
mod types;

pub use client::{HttpPostsClient, PostsApi};
pub use error::ApiError;
pub use types::{NewPost, Post, PostId};
