//! Business logic services for the Počasie API server

pub mod city;

pub use city::CityService;
