//! Create forms: typed drafts, inline validation and single-flight submit.
//!
//! Forms talk to the store only through the persistence ports, so tests can
//! drive them with slow or failing fakes.

mod feedback;
pub mod notification;
pub mod order_form;
pub mod product_form;
pub mod submit;

pub use feedback::Feedback;
pub use notification::{Notification, NotificationKind};
pub use order_form::{LineItemDraft, OrderDraft, OrderForm};
pub use product_form::ProductForm;
pub use submit::{InFlight, Redirect, Route, SubmitGuard, SubmitOutcome};
