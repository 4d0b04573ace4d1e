use thiserror::Error;

use crate::actor_framework::FrameworkError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("SKU already exists: {0}")]
    DuplicateSku(String),
    #[error("Product rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Conflict(sku) => ProductError::DuplicateSku(sku),
            FrameworkError::Rejected(reason) => ProductError::Rejected(reason),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
