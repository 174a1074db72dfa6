//! SeaORM entities for the `user` and `blog` tables.
//!
//! Each module converts its `Model` into the matching domain type.

pub mod blog;
pub mod user;
