use crate::store::form::state::Field;
use crate::store::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    /// Replace a field's value (every keystroke).
    SetFieldValue { field: Field, value: String },
    /// The field lost focus.
    TouchField(Field),
    /// User asked to save. Touches every field; accepted only when valid.
    Submit,
    /// The create request was rejected; allow another submit.
    SubmitFailed,
}

impl Intent for FormIntent {}
