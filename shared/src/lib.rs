//! Shared types and models for the Počasie city weather browser
//!
//! This crate contains the wire types, the weather animation rule, form
//! validation and view rendering used by the backend, the client and the
//! browser bindings (via WASM).

pub mod models;
pub mod types;
pub mod validation;
pub mod view;

pub use models::*;
pub use types::*;
pub use validation::*;
pub use view::*;
