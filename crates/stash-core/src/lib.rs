//! # stash-core
//!
//! Core crate for the Stash dashboard. Contains configuration schemas,
//! sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Stash crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
