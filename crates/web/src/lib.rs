//! Catalog web server library.
//!
//! Exposes the building blocks (config, state, error handling, router,
//! common-data store) so integration tests and the binary entrypoint can
//! both access them.

pub mod common;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
