use serde::Serialize;

/// Callback told about selection changes.
///
/// Receives the new current identity, `None` when there is nothing to
/// choose. Any context the callback needs is captured by the closure.
pub type Listener<I> = Box<dyn FnMut(Option<&I>)>;

/// How a requested selection was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SelectionOutcome<I> {
    /// The requested identity is now current.
    Honored,
    /// The requested identity is not on the menu; the first entry (or
    /// nothing, for an empty menu) was selected instead.
    Coerced { requested: Option<I> },
}

impl<I> SelectionOutcome<I> {
    pub fn is_coerced(&self) -> bool {
        matches!(self, SelectionOutcome::Coerced { .. })
    }
}
