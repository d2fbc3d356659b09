use sqlx::MySqlPool;

use crate::models::CategoryRow;

pub struct CategoryRepo;

impl CategoryRepo {
    /// First `limit` categories ascending by id.
    pub async fn list(pool: &MySqlPool, limit: i64) -> Result<Vec<CategoryRow>, sqlx::Error> {
        sqlx::query_as::<_, CategoryRow>(
            "SELECT CAST(category_id AS SIGNED) AS category_id, name \
             FROM category \
             ORDER BY category_id \
             LIMIT ?",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
