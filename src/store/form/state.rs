use serde::Serialize;
use std::fmt;

use crate::api::NewPost;
use crate::store::form::validate::validate;
use crate::store::mvi::StoreState;

/// The editable fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Categories,
    Content,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Categories, Field::Content];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Categories => "Categories",
            Field::Content => "Content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FieldState {
    pub value: String,
    /// Set once the field has been left or the form submitted.
    pub touched: bool,
    /// Current validation message, shown only when `touched`.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub title: FieldState,
    pub categories: FieldState,
    pub content: FieldState,
    /// A valid submit was accepted and the create request has not failed.
    pub submitting: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreState for FormState {}

impl FormState {
    /// Empty, untouched form with errors already computed.
    pub fn new() -> Self {
        let mut form = FormState {
            title: FieldState::default(),
            categories: FieldState::default(),
            content: FieldState::default(),
            submitting: false,
        };
        form.refresh_errors();
        form
    }

    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Title => &self.title,
            Field::Categories => &self.categories,
            Field::Content => &self.content,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Title => &mut self.title,
            Field::Categories => &mut self.categories,
            Field::Content => &mut self.content,
        }
    }

    /// Error to display for `field`: only once it has been touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        let state = self.field(field);
        if state.touched {
            state.error.as_deref()
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| self.field(*f).error.is_none())
    }

    /// Raw field values.
    pub fn values(&self) -> NewPost {
        NewPost {
            title: self.title.value.clone(),
            categories: self.categories.value.clone(),
            content: self.content.value.clone(),
        }
    }

    /// Field values with surrounding whitespace removed, as sent to the service.
    pub fn trimmed(&self) -> NewPost {
        NewPost {
            title: self.title.value.trim().to_string(),
            categories: self.categories.value.trim().to_string(),
            content: self.content.value.trim().to_string(),
        }
    }

    pub(crate) fn refresh_errors(&mut self) {
        let mut errors = validate(&self.values());
        for field in Field::ALL {
            self.field_mut(field).error = errors.remove(&field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_invalid_but_shows_nothing() {
        let form = FormState::new();
        assert!(!form.is_valid());
        for field in Field::ALL {
            assert!(form.field(field).error.is_some());
            assert!(form.visible_error(field).is_none());
        }
    }

    #[test]
    fn trimmed_strips_whitespace() {
        let mut form = FormState::new();
        form.title.value = "  Hello ".to_string();
        form.categories.value = "rust\n".to_string();
        form.content.value = "\tbody".to_string();
        assert_eq!(
            form.trimmed(),
            NewPost {
                title: "Hello".to_string(),
                categories: "rust".to_string(),
                content: "body".to_string(),
            }
        );
    }
}
