//! Appwrite REST backend.

pub mod client;
pub mod models;
pub mod query;

pub use client::AppwriteBackend;
pub use query::Query;
