use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ChooserError;

/// Position of one menu node: child indices from the menu root down.
///
/// Written as dot-separated indices, e.g. `2.0.13`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EntryPath(Vec<usize>);

impl EntryPath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }
}

impl fmt::Display for EntryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, index) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

impl FromStr for EntryPath {
    type Err = ChooserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ChooserError::InvalidArgument {
                message: "entry path cannot be empty".to_string(),
            });
        }

        trimmed
            .split('.')
            .map(|part| {
                part.parse::<usize>()
                    .map_err(|e| ChooserError::InvalidArgument {
                        message: format!("invalid entry path '{trimmed}': {e}"),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
