use sqlx::MySqlPool;

use crate::models::CustomerRow;

pub struct CustomerRepo;

impl CustomerRepo {
    /// First `limit` customers ascending by id.
    pub async fn list(pool: &MySqlPool, limit: i64) -> Result<Vec<CustomerRow>, sqlx::Error> {
        sqlx::query_as::<_, CustomerRow>(
            "SELECT CAST(customer_id AS SIGNED) AS customer_id, \
                    first_name, last_name, email \
             FROM customer \
             ORDER BY customer_id \
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
