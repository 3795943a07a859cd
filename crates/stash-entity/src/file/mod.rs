//! File domain entities.

pub mod kind;
pub mod model;
pub mod query;

pub use kind::FileType;
pub use model::FileRecord;
pub use query::FileQuery;
