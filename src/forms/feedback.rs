use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ValidationErrors;
use crate::forms::Notification;

/// What a form shows besides its draft: inline errors and the current toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback<F: Ord> {
    pub errors: ValidationErrors<F>,
    pub notification: Option<Notification>,
}

impl<F: Ord> Default for Feedback<F> {
    fn default() -> Self {
        Self {
            errors: ValidationErrors::default(),
            notification: None,
        }
    }
}

/// Feedback shared between `submit(&self)` and the setters.
///
/// The lock is only ever held for a single statement, never across an await.
#[derive(Debug)]
pub(crate) struct FeedbackCell<F: Ord>(Mutex<Feedback<F>>);

impl<F: Ord> Default for FeedbackCell<F> {
    fn default() -> Self {
        Self(Mutex::new(Feedback::default()))
    }
}

impl<F: Ord + Clone> FeedbackCell<F> {
    pub(crate) fn lock(&self) -> MutexGuard<'_, Feedback<F>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn get_mut(&mut self) -> &mut Feedback<F> {
        self.0.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn snapshot(&self) -> Feedback<F> {
        self.lock().clone()
    }
}
