pub mod catalog;
pub mod product;
pub mod order;
pub mod seed;
pub mod validation;

pub use catalog::*;
pub use product::*;
pub use order::*;
pub use validation::*;
