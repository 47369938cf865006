//! Shared types and models for the AgriSetu Platform
//!
//! This crate contains types shared between the client applications
//! (native and via WASM), the form controllers, and other components of
//! the system.

pub mod economics;
pub mod models;
pub mod types;
pub mod validation;

pub use economics::*;
pub use models::*;
pub use types::*;
pub use validation::*;
