//! Project catalog: category filter, free-text search and ordering, shared by
//! the HTML project list and the JSON API.

pub mod filter;
pub mod handlers;

pub use filter::{
    category_counts, filter_projects, CatalogStats, CategoryCount, CategoryFilter, ProjectQuery,
};
