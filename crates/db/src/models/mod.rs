//! Raw row structs, one per query shape.
//!
//! Every column is `Option` so nullability is handled by the coercion
//! policy rather than scattered across queries; unsigned Sakila keys are
//! cast to SIGNED in SQL and land as [`DbId`].

pub mod customer;
pub mod film;
pub mod rental;

pub use customer::CustomerRow;
pub use film::{CategoryRow, FilmDetailRow, FilmHomeRow};
pub use rental::RentalRow;

pub use catalog_core::types::DbId;
