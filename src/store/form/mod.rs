//! Edit state of the "new post" form.
//!
//! Lives in `AppState::form` only while the creation view is mounted and never
//! shares data with the post slices.
//!
//! - `state.rs` - Field and form state
//! - `intent.rs` - Edits and submission events
//! - `reducer.rs` - State transitions
//! - `validate.rs` - Required-field rules

mod intent;
mod reducer;
mod state;
mod validate;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{Field, FieldState, FormState};
pub use validate::{validate, ValidationErrors};
