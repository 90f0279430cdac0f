use std::collections::BTreeMap;

use crate::api::NewPost;
use crate::store::form::state::Field;

/// Messages for invalid fields only. Empty means the form may be submitted.
pub type ValidationErrors = BTreeMap<Field, String>;

/// Every field is required once surrounding whitespace is removed.
pub fn validate(values: &NewPost) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if values.title.trim().is_empty() {
        errors.insert(
            Field::Title,
            "Please supply a title for your blog post".to_string(),
        );
    }

    if values.categories.trim().is_empty() {
        errors.insert(
            Field::Categories,
            "Please supply at least one category for the blog post".to_string(),
        );
    }

    if values.content.trim().is_empty() {
        errors.insert(
            Field::Content,
            "Please supply a content for the blog post".to_string(),
        );
    }

    errors
}
