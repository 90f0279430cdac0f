//! Base trait for store state.

use serde::Serialize;

/// Marker trait for state objects.
///
/// States are:
/// - Replaced, never patched in place (Clone to derive new states)
/// - Comparable (PartialEq for detecting changes)
/// - Serializable (the whole store can be dumped as JSON)
pub trait StoreState: Clone + PartialEq + Default + Serialize + Send + 'static {}
