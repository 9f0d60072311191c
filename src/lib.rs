//! Data-access layer for the LightBnB rental listings app: users, properties,
//! reservations, and the filtered property search, over SQLite.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;

pub use config::DbConfig;
pub use db::Database;
pub use errors::{DbError, DbResult};

#[cfg(test)]
mod tests;
