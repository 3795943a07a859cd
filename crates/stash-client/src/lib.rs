//! # stash-client
//!
//! Storage backend implementations for Stash. Currently Appwrite, over its
//! REST API.

pub mod appwrite;

pub use appwrite::AppwriteBackend;
