//! Model-View-Intent (MVI) primitives.
//!
//! All application state changes flow one way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: a serializable snapshot of one slice (or all) of the store
//! - **Intent**: a resolved request result or a local edit
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
