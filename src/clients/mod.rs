//! Typed clients over the resource actors, plus the persistence ports they implement.

#[macro_use]
mod macros;

pub mod order_client;
pub mod port;
pub mod product_client;

pub use order_client::OrderClient;
pub use port::{OrderPort, ProductPort, SimulatedLatency};
pub use product_client::ProductClient;
