//! Client for the Počasie city weather API
//!
//! [`CityBrowser`] drives the list/detail/edit flow against a [`CityApi`]
//! and draws on any [`Screen`]; [`cli`] wires it to the `pocasie` binary.

pub mod api;
pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod screen;

pub use api::CityApi;
pub use browser::CityBrowser;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, Operation};
pub use screen::{Screen, TerminalScreen};
