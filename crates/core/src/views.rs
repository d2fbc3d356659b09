//! View models and the builders that shape coerced rows into them.
//!
//! A view model is the plain, already-coerced structure a template receives.
//! Building one is pure: serialize the raw row, apply the route's field map,
//! deserialize into the typed view. Nothing here touches the database.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::{coerce_row, FieldMap, FieldType};
use crate::types::DbId;
use crate::error::ShapeError;

// ---------------------------------------------------------------------------
// View model types
// ---------------------------------------------------------------------------

/// Film as shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmSummary {
    pub film_id: Option<DbId>,
    pub title: String,
    pub release_year: Option<i64>,
    /// `"first last"` for every associated actor, joined by `", "` in join
    /// order. Empty string when the film has no actors.
    pub actors: String,
}

/// Film as shown on the movie list page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmDetail {
    pub film_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub release_year: Option<i64>,
    pub rental_rate: Option<f64>,
    pub length: Option<i64>,
    pub actors: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: Option<DbId>,
    pub name: String,
}

/// Customer with its most recent rentals attached (at most 5, newest first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub rentals: Vec<Rental>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub rental_id: Option<DbId>,
    pub rental_date: String,
    pub title: String,
}

/// Rental carrying the customer id it belongs to; intermediate shape used
/// to distribute one batched query across the customer page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRental {
    pub customer_id: Option<DbId>,
    pub rental_id: Option<DbId>,
    pub rental_date: String,
    pub title: String,
}

/// Static display metadata shared by every template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonData {
    pub site_name: String,
    pub tagline: String,
    pub nav: Vec<NavLink>,
    pub footer: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

// ---------------------------------------------------------------------------
// Per-route field maps
// ---------------------------------------------------------------------------

pub const FILM_SUMMARY_FIELDS: &FieldMap = &[
    ("film_id", FieldType::Number),
    ("title", FieldType::String),
    ("release_year", FieldType::Number),
    ("actors", FieldType::String),
];

pub const FILM_DETAIL_FIELDS: &FieldMap = &[
    ("film_id", FieldType::Number),
    ("title", FieldType::String),
    ("description", FieldType::String),
    ("release_year", FieldType::Number),
    ("rental_rate", FieldType::Number),
    ("length", FieldType::Number),
    ("actors", FieldType::String),
];

pub const CATEGORY_FIELDS: &FieldMap = &[
    ("category_id", FieldType::Number),
    ("name", FieldType::String),
];

pub const CUSTOMER_FIELDS: &FieldMap = &[
    ("customer_id", FieldType::Number),
    ("first_name", FieldType::String),
    ("last_name", FieldType::String),
    ("email", FieldType::String),
];

pub const RENTAL_FIELDS: &FieldMap = &[
    ("customer_id", FieldType::Number),
    ("rental_id", FieldType::Number),
    ("rental_date", FieldType::String),
    ("title", FieldType::String),
];

/// Rentals attached per customer.
pub const RENTALS_PER_CUSTOMER: usize = 5;

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Shape a set of raw rows into typed view models through the coercion
/// policy of [`crate::coerce`].
pub fn rows_to_views<R, V>(rows: Vec<R>, fields: &FieldMap) -> Result<Vec<V>, ShapeError>
where
    R: Serialize,
    V: DeserializeOwned,
{
    rows.into_iter()
        .map(|row| {
            let Value::Object(map) = serde_json::to_value(row)? else {
                return Err(ShapeError::NotAnObject);
            };
            let coerced = Value::Object(coerce_row(map, fields));
            Ok(serde_json::from_value(coerced)?)
        })
        .collect()
}

/// Distribute the batched rental rows across their customers.
///
/// Rows arrive already ordered newest-first within each customer; that order
/// is preserved. Every customer ends up with a rentals vec of length 0..=5,
/// never more, and customers with no rentals keep an empty vec.
pub fn attach_rentals(customers: &mut [Customer], rentals: Vec<CustomerRental>) {
    let mut by_customer: HashMap<DbId, Vec<Rental>> = HashMap::new();
    for rental in rentals {
        let Some(customer_id) = rental.customer_id else {
            continue;
        };
        by_customer.entry(customer_id).or_default().push(Rental {
            rental_id: rental.rental_id,
            rental_date: rental.rental_date,
            title: rental.title,
        });
    }

    for customer in customers {
        if let Some(id) = customer.customer_id {
            if let Some(mut list) = by_customer.remove(&id) {
                list.truncate(RENTALS_PER_CUSTOMER);
                customer.rentals = list;
            }
        }
    }
}
