//! Catalog domain logic: value coercion and view-model building.
//!
//! Everything in this crate is pure and synchronous; the db and web crates
//! depend on it, never the other way around.

pub mod coerce;
pub mod error;
pub mod types;
pub mod views;
