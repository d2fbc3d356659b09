//! Film and category rows.

use serde::Serialize;
use sqlx::FromRow;

use super::DbId;

/// Home page film row: title, year, and the aggregated actor names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmHomeRow {
    pub film_id: Option<DbId>,
    pub title: Option<String>,
    pub release_year: Option<i64>,
    /// GROUP_CONCAT result; NULL when the film has no actors.
    pub actors: Option<String>,
}

/// Movie list row: adds description, rate, and length.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FilmDetailRow {
    pub film_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_year: Option<i64>,
    pub rental_rate: Option<f64>,
    pub length: Option<i64>,
    pub actors: Option<String>,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryRow {
    pub category_id: Option<DbId>,
    pub name: Option<String>,
}
