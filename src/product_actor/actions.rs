/// Custom actions for Product entities.
///
/// Products are never edited after creation; toggling availability is the
/// only status change the dashboard performs.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Marks the product active or inactive.
    SetActive(bool),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Result from SetActive - whether the flag actually changed
    SetActive(bool),
}
