//! One repository per query family. Repositories are stateless; every call
//! takes the pool and returns raw rows.

pub mod category_repo;
pub mod customer_repo;
pub mod film_repo;
pub mod rental_repo;

pub use category_repo::CategoryRepo;
pub use customer_repo::CustomerRepo;
pub use film_repo::FilmRepo;
pub use rental_repo::RentalRepo;
