//! Single-flight submission and its outcomes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde::Serialize;

/// Allows at most one submission at a time.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    in_flight: AtomicBool,
}

impl SubmitGuard {
    /// Claims the guard, or returns `None` while another submission holds it.
    #[must_use]
    pub fn try_begin(&self) -> Option<InFlight<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight { guard: self })
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Held for the duration of one submission. Releases the guard on drop,
/// including when the submitting future is cancelled or panics.
#[derive(Debug)]
pub struct InFlight<'a> {
    guard: &'a SubmitGuard,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.guard.in_flight.store(false, Ordering::Release);
    }
}

/// Where the dashboard goes after a successful create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    Products,
    Orders,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Products => "/dashboard/products",
            Route::Orders => "/dashboard/orders",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Persisted; navigate to `redirect.to` once `redirect.after` has passed.
    Created { id: String, redirect: Redirect },
    /// Field errors were recorded on the form. Nothing was persisted.
    Invalid,
    /// The store rejected or failed the request. The draft is kept.
    Failed,
    AlreadySubmitting,
}

impl SubmitOutcome {
    pub fn created_id(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Created { id, .. } => Some(id),
            _ => None,
        }
    }
}
