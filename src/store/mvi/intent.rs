//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Results of remote requests (pending, resolved, rejected)
/// - Local edits (form field changes)
/// - Slice lifecycle events (form mounted/unmounted)
pub trait Intent: Send + 'static {}
