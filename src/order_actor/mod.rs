//! Order-specific store logic: creation from a priced payload and status actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
