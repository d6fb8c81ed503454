//! HTTP handlers for the Počasie API server

pub mod city;
pub mod health;

pub use city::*;
pub use health::*;
