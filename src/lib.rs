//! Terminal client for a remote blog posts service.
//!
//! The crate is layered bottom-up:
//!
//! ```text
//! api (PostsApi) ──→ store::action ──→ store (reducers) ──→ ui (views)
//!        ↑                                                     │
//!        └──────────────────── dispatch ───────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
