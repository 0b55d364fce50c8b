//! Selectable items: an opaque identity paired with its display label.

use serde::{Deserialize, Serialize};

use crate::errors::ChooserError;

/// One selectable item.
///
/// The identity means something only to the owning application; the
/// chooser compares identities and never interprets them. Identities need
/// not be unique, lookups resolve to the last matching item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooserItem<I> {
    pub identity: I,
    pub label: String,
}

impl<I> ChooserItem<I> {
    pub fn new(identity: I, label: impl Into<String>) -> Self {
        Self {
            identity,
            label: label.into(),
        }
    }
}

impl<I, L: Into<String>> From<(I, L)> for ChooserItem<I> {
    fn from((identity, label): (I, L)) -> Self {
        Self::new(identity, label)
    }
}

/// Pair up parallel identity and label sequences.
///
/// # Errors
///
/// Returns `ChooserError::InvalidArgument` when the sequences differ in length.
pub fn items_from_parts<I>(
    identities: Vec<I>,
    labels: Vec<String>,
) -> Result<Vec<ChooserItem<I>>, ChooserError> {
    if identities.len() != labels.len() {
        return Err(ChooserError::InvalidArgument {
            message: format!(
                "{} identities but {} labels",
                identities.len(),
                labels.len()
            ),
        });
    }

    Ok(identities
        .into_iter()
        .zip(labels)
        .map(|(identity, label)| ChooserItem { identity, label })
        .collect())
}

/// Index of the last item carrying `identity`.
pub(crate) fn rposition<I: PartialEq>(items: &[ChooserItem<I>], identity: &I) -> Option<usize> {
    items.iter().rposition(|item| &item.identity == identity)
}
