//! A small e-commerce schema (category, product, customer, orders,
//! order_details) with cascading foreign keys and check constraints, plus a
//! handful of reporting queries, built on sea-orm.
//!
//! `entities` declares the five tables, `schema` creates them, `store` owns
//! the write path (and keeps `orders.total_amount` in step with the order's
//! lines), and `reports` holds the read-only aggregates.

pub mod entities;
pub mod error;
pub mod reports;
pub mod schema;
pub mod seed;
pub mod store;

pub use error::Error;
pub use schema::setup_schema;
