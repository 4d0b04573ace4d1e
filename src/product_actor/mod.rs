//! Product-specific store logic: creation, SKU uniqueness and status actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
