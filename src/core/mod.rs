//! Core infrastructure shared across diagram models
//!
//! Error types, logging setup, and the metadata block every diagram type
//! carries alongside its own data.

mod error;
pub mod logging;
mod metadata;

pub use error::*;
pub use logging::*;
pub use metadata::*;
