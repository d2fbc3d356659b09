use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

use super::DbId;

/// One rental joined through inventory to its film title.
///
/// Carries `customer_id` so the batched customer-page query can be
/// regrouped per customer. Serializes `rental_date` as an ISO 8601 string,
/// which is what the string coercion then passes through.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RentalRow {
    pub customer_id: Option<DbId>,
    pub rental_id: Option<DbId>,
    pub rental_date: Option<NaiveDateTime>,
    pub title: Option<String>,
}
