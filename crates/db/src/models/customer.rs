use serde::Serialize;
use sqlx::FromRow;

use super::DbId;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomerRow {
    pub customer_id: Option<DbId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}
