//! # volumod-core
//!
//! Core crate for the Volumod production tracker's notification subsystem.
//! Contains configuration schemas, typed identifiers, logging setup, and
//! the unified error system.
//!
//! This crate has **no** internal dependencies on other Volumod crates.

pub mod config;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
