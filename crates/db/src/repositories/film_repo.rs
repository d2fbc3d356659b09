//! Repository for the `film` table and its actor aggregation.

use sqlx::MySqlPool;

use crate::models::{FilmDetailRow, FilmHomeRow};

/// Actor-name aggregate: `"first last"` per actor, joined by `", "`.
///
/// No secondary sort on actor inside the aggregate; the order is whatever
/// the join produces. Films without actors yield NULL here and `""` after
/// coercion.
const ACTOR_AGGREGATE: &str =
    "GROUP_CONCAT(CONCAT(a.first_name, ' ', a.last_name) SEPARATOR ', ') AS actors";

/// Provides the film queries behind the home and movie list pages.
pub struct FilmRepo;

impl FilmRepo {
    /// First `limit` films ascending by id, with title, year, and actors.
    pub async fn list_for_home(
        pool: &MySqlPool,
        limit: i64,
    ) -> Result<Vec<FilmHomeRow>, sqlx::Error> {
        let query = format!(
            "SELECT CAST(f.film_id AS SIGNED) AS film_id, f.title, \
                    CAST(f.release_year AS SIGNED) AS release_year, \
                    {ACTOR_AGGREGATE} \
             FROM film f \
             LEFT JOIN film_actor fa ON fa.film_id = f.film_id \
             LEFT JOIN actor a ON a.actor_id = fa.actor_id \
             GROUP BY f.film_id \
             ORDER BY f.film_id \
             LIMIT ?"
        );
        sqlx::query_as::<_, FilmHomeRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// First `limit` films ascending by id, with description, rate, length,
    /// and actors.
    pub async fn list_with_details(
        pool: &MySqlPool,
        limit: i64,
    ) -> Result<Vec<FilmDetailRow>, sqlx::Error> {
        let query = format!(
            "SELECT CAST(f.film_id AS SIGNED) AS film_id, f.title, f.description, \
                    CAST(f.release_year AS SIGNED) AS release_year, \
                    CAST(f.rental_rate AS DOUBLE) AS rental_rate, \
                    CAST(f.length AS SIGNED) AS length, \
                    {ACTOR_AGGREGATE} \
             FROM film f \
             LEFT JOIN film_actor fa ON fa.film_id = f.film_id \
             LEFT JOIN actor a ON a.actor_id = fa.actor_id \
             GROUP BY f.film_id \
             ORDER BY f.film_id \
             LIMIT ?"
        );
        sqlx::query_as::<_, FilmDetailRow>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
