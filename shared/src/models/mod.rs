//! Domain models for the AgriSetu Platform

mod crop;
mod detection;
mod harvest;
mod lot;
mod member;
mod payment;
mod plan;
mod processing;
mod recommendation;
mod weather;

pub use crop::*;
pub use detection::*;
pub use harvest::*;
pub use lot::*;
pub use member::*;
pub use payment::*;
pub use plan::*;
pub use processing::*;
pub use recommendation::*;
pub use weather::*;
