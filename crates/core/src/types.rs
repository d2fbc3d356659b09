/// Sakila primary keys are small unsigned integers; queries cast them to
/// SIGNED so every id travels as an i64.
pub type DbId = i64;
