//! Repository for rentals on the customer page.
//!
//! The page needs the latest rentals for every listed customer. Instead of
//! one query per customer, a single window-ranked query fetches the whole
//! set: rentals are partitioned by customer, ordered newest-first, and cut
//! at the per-customer rank.

use sqlx::MySqlPool;

use crate::models::{DbId, RentalRow};

pub struct RentalRepo;

impl RentalRepo {
    /// Latest `per_customer` rentals for each id in `customer_ids`, newest
    /// first within each customer. An empty id set issues no query.
    pub async fn latest_for_customers(
        pool: &MySqlPool,
        customer_ids: &[DbId],
        per_customer: i64,
    ) -> Result<Vec<RentalRow>, sqlx::Error> {
        if customer_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT customer_id, rental_id, rental_date, title FROM ( \
                 SELECT CAST(r.customer_id AS SIGNED) AS customer_id, \
                        CAST(r.rental_id AS SIGNED) AS rental_id, \
                        r.rental_date, \
                        f.title, \
                        ROW_NUMBER() OVER ( \
                            PARTITION BY r.customer_id \
                            ORDER BY r.rental_date DESC \
                        ) AS rn \
                 FROM rental r \
                 JOIN inventory i ON i.inventory_id = r.inventory_id \
                 JOIN film f ON f.film_id = i.film_id \
                 WHERE r.customer_id IN ({placeholders}) \
             ) ranked \
             WHERE rn <= ? \
             ORDER BY customer_id, rental_date DESC",
            placeholders = in_placeholders(customer_ids.len()),
        );

        let mut q = sqlx::query_as::<_, RentalRow>(&query);
        for &id in customer_ids {
            q = q.bind(id);
        }
        q.bind(per_customer).fetch_all(pool).await
    }
}

/// `?, ?, ...` for an SQL IN clause of `n` values.
fn in_placeholders(n: usize) -> String {
    let mut s = String::with_capacity(n.saturating_mul(3));
    for i in 0..n {
        if i > 0 {
            s.push_str(", ");
        }
        s.push('?');
    }
    s
}
