//! # volumod-entity
//!
//! Domain entity models for the Volumod notification subsystem. Every struct
//! in this crate represents a stored record or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`; row
//! mapping lives in `volumod-database`.

pub mod audit;
pub mod notification;
pub mod user;
