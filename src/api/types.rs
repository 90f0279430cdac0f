use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned post identity.
///
/// The service hands ids out as JSON numbers; they are kept as strings so that
/// routes (`/posts/:id`) and requests never depend on the numeric form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PostId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => PostId(text),
            RawId::Number(number) => PostId(number.to_string()),
        })
    }
}

/// A blog post as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub categories: String,
    /// Absent in list responses.
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NewPost {
    pub title: String,
    pub categories: String,
    pub content: String,
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_becomes_string() {
        let post: Post =
            serde_json::from_str(r#"{"id": 42, "title": "t", "categories": "c", "content": "x"}"#)
                .unwrap();
        assert_eq!(post.id.as_str(), "42");
    }

    #[test]
    fn list_entry_without_content() {
        let post: Post =
            serde_json::from_str(r#"{"id": "1", "title": "A", "categories": null}"#).unwrap();
        assert_eq!(post.title, "A");
        assert_eq!(post.categories, "");
        assert_eq!(post.content, "");
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let json = serde_json::to_string(&PostId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }
}
