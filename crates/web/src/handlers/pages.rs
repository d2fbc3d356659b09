//! Handlers for the three catalog pages.
//!
//! Each handler runs its queries, shapes the rows into view models through
//! the coercion policy, and renders an askama template to a full String
//! before any byte leaves the process; a failure anywhere produces the one
//! fixed 500 body and never a partial page.

use std::sync::Arc;

use askama::Template;
use axum::extract::State;
use axum::response::Html;
use catalog_core::types::DbId;
use catalog_core::views::{
    self, attach_rentals, rows_to_views, Category, CommonData, Customer, CustomerRental,
    FilmDetail, FilmSummary, RENTALS_PER_CUSTOMER,
};
use catalog_db::repositories::{CategoryRepo, CustomerRepo, FilmRepo, RentalRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// Films on the home page.
const HOME_FILM_LIMIT: i64 = 5;

/// Categories on the home page.
const HOME_CATEGORY_LIMIT: i64 = 5;

/// Films on the movie list page.
const MOVIE_LIST_LIMIT: i64 = 15;

/// Customers on the customer page.
const CUSTOMER_LIST_LIMIT: i64 = 25;

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    movies: Vec<FilmSummary>,
    categories: Vec<Category>,
    common: Arc<CommonData>,
    active: &'static str,
}

#[derive(Template)]
#[template(path = "movies.html")]
struct MoviesTemplate {
    movies: Vec<FilmDetail>,
    common: Arc<CommonData>,
    active: &'static str,
}

#[derive(Template)]
#[template(path = "customers.html")]
struct CustomersTemplate {
    customers: Vec<Customer>,
    common: Arc<CommonData>,
    active: &'static str,
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Home page: first 5 films (with aggregated actor names) and first 5
/// categories, both ascending by id.
pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    let film_rows = FilmRepo::list_for_home(&state.pool, HOME_FILM_LIMIT).await?;
    let category_rows = CategoryRepo::list(&state.pool, HOME_CATEGORY_LIMIT).await?;

    let movies: Vec<FilmSummary> = rows_to_views(film_rows, views::FILM_SUMMARY_FIELDS)?;
    let categories: Vec<Category> = rows_to_views(category_rows, views::CATEGORY_FIELDS)?;
    let common = state.common.get()?;

    let page = IndexTemplate {
        movies,
        categories,
        common,
        active: "/",
    };
    Ok(Html(page.render()?))
}

// ---------------------------------------------------------------------------
// GET /movies
// ---------------------------------------------------------------------------

/// Movie list: first 15 films ascending by id, with description, rate,
/// length, and actors.
pub async fn movies(State(state): State<AppState>) -> AppResult<Html<String>> {
    let film_rows = FilmRepo::list_with_details(&state.pool, MOVIE_LIST_LIMIT).await?;

    let movies: Vec<FilmDetail> = rows_to_views(film_rows, views::FILM_DETAIL_FIELDS)?;
    let common = state.common.get()?;

    let page = MoviesTemplate {
        movies,
        common,
        active: "/movies",
    };
    Ok(Html(page.render()?))
}

// ---------------------------------------------------------------------------
// GET /customers
// ---------------------------------------------------------------------------

/// Customer list: first 25 customers ascending by id, each with its 5 most
/// recent rentals (one batched query for the whole page).
pub async fn customers(State(state): State<AppState>) -> AppResult<Html<String>> {
    let customer_rows = CustomerRepo::list(&state.pool, CUSTOMER_LIST_LIMIT).await?;
    let mut customers: Vec<Customer> = rows_to_views(customer_rows, views::CUSTOMER_FIELDS)?;

    let ids: Vec<DbId> = customers.iter().filter_map(|c| c.customer_id).collect();
    let rental_rows =
        RentalRepo::latest_for_customers(&state.pool, &ids, RENTALS_PER_CUSTOMER as i64).await?;
    let rentals: Vec<CustomerRental> = rows_to_views(rental_rows, views::RENTAL_FIELDS)?;
    attach_rentals(&mut customers, rentals);

    let common = state.common.get()?;

    let page = CustomersTemplate {
        customers,
        common,
        active: "/customers",
    };
    Ok(Html(page.render()?))
}

#[cfg(test)]
mod tests {
    use catalog_core::views::{NavLink, Rental};

    use super::*;

    fn common() -> Arc<CommonData> {
        Arc::new(CommonData {
            site_name: "Sakila Video".into(),
            tagline: "Classic rentals".into(),
            nav: vec![
                NavLink {
                    label: "Home".into(),
                    href: "/".into(),
                },
                NavLink {
                    label: "Movies".into(),
                    href: "/movies".into(),
                },
            ],
            footer: "Sakila Video".into(),
            currency: "EUR ".into(),
        })
    }

    #[test]
    fn index_template_renders_films_and_categories() {
        let page = IndexTemplate {
            movies: vec![FilmSummary {
                film_id: Some(1),
                title: "ACADEMY DINOSAUR".into(),
                release_year: Some(2006),
                actors: "John Doe, Jane Roe".into(),
            }],
            categories: vec![Category {
                category_id: Some(1),
                name: "Action".into(),
            }],
            common: common(),
            active: "/",
        };

        let html = page.render().unwrap();
        assert!(html.contains("ACADEMY DINOSAUR"));
        assert!(html.contains("John Doe, Jane Roe"));
        assert!(html.contains("Action"));
        assert!(html.contains("Sakila Video"));
    }

    #[test]
    fn index_template_hides_actor_line_for_actorless_films() {
        let page = IndexTemplate {
            movies: vec![FilmSummary {
                film_id: Some(2),
                title: "ACE GOLDFINGER".into(),
                release_year: None,
                actors: String::new(),
            }],
            categories: Vec::new(),
            common: common(),
            active: "/",
        };

        let html = page.render().unwrap();
        assert!(html.contains("ACE GOLDFINGER"));
        assert!(!html.contains("class=\"actors\""));
    }

    #[test]
    fn movies_template_renders_detail_columns() {
        let page = MoviesTemplate {
            movies: vec![FilmDetail {
                film_id: Some(1),
                title: "ACADEMY DINOSAUR".into(),
                description: "A Epic Drama of a Feminist".into(),
                release_year: Some(2006),
                rental_rate: Some(4.99),
                length: Some(150),
                actors: "Penelope Guiness".into(),
            }],
            common: common(),
            active: "/movies",
        };

        let html = page.render().unwrap();
        assert!(html.contains("A Epic Drama of a Feminist"));
        assert!(html.contains("4.99"));
        // 150 minutes crosses the long-film threshold.
        assert!(html.contains("long"));
    }

    #[test]
    fn customers_template_renders_nested_rentals() {
        let page = CustomersTemplate {
            customers: vec![
                Customer {
                    customer_id: Some(1),
                    first_name: "MARY".into(),
                    last_name: "SMITH".into(),
                    email: "mary@example.com".into(),
                    rentals: vec![Rental {
                        rental_id: Some(76),
                        rental_date: "2005-05-25T11:30:37".into(),
                        title: "PATIENT SISTER".into(),
                    }],
                },
                Customer {
                    customer_id: Some(2),
                    first_name: "PATRICIA".into(),
                    last_name: "JOHNSON".into(),
                    email: "patricia@example.com".into(),
                    rentals: Vec::new(),
                },
            ],
            common: common(),
            active: "/customers",
        };

        let html = page.render().unwrap();
        assert!(html.contains("PATIENT SISTER"));
        assert!(html.contains("2005-05-25T11:30:37"));
        assert!(html.contains("No rentals yet"));
    }

    #[test]
    fn rendering_is_byte_identical_for_identical_view_models() {
        let make = || IndexTemplate {
            movies: Vec::new(),
            categories: Vec::new(),
            common: common(),
            active: "/",
        };
        assert_eq!(make().render().unwrap(), make().render().unwrap());
    }
}
