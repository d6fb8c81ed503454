//! Domain models for the city weather browser

mod city;
mod weather;

pub use city::*;
pub use weather::*;
