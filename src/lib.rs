//! Core of an admin dashboard for a product catalog and customer orders.
//!
//! Each collection lives in a resource actor ([`actor_framework`]). Typed
//! clients ([`clients`]) front the actors and implement the persistence
//! ports the create forms ([`forms`]) submit through. The list, metrics and
//! detail views ([`view`]) are pure functions of collection snapshots.

pub mod domain;
pub mod clients;

pub mod app_system;
pub mod forms;
pub mod view;

pub mod actor_framework;
pub mod order_actor;
pub mod product_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;
