//! # stash-entity
//!
//! Domain models for the Stash dashboard. File and user records mirror the
//! documents stored in the Appwrite collections; usage types are value
//! objects computed locally. All models derive `Debug`, `Clone`,
//! `Serialize`, and `Deserialize`.

pub mod file;
pub mod usage;
pub mod user;
