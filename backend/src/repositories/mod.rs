//! Database repositories
//!
//! Thin wrappers over parameterized queries. Database errors are returned
//! unchanged; a missing row is `Ok(None)`.

pub mod product;
pub mod user;

pub use product::{CreateProduct, ProductRecord, ProductRepository, UpdateProduct};
pub use user::{CreateUser, UpdateUser, UserRecord, UserRepository};
