use std::fmt;

use thiserror::Error;

/// A single failed lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("builder found no object for key {key} ({kind})")]
    NotFound { key: String, kind: &'static str },

    #[error("builder has bad type for key {key} not a {kind}")]
    BadType { key: String, kind: &'static str },
}

/// Every failed lookup of a [`Lookup`](super::Lookup), in order.
///
/// Displays as one message per line; empty when nothing failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupErrors(Vec<LookupError>);

impl LookupErrors {
    pub(crate) fn push(&mut self, error: LookupError) {
        self.0.push(error);
    }

    /// `true` when every lookup so far succeeded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failed lookups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failed lookups in the order they happened.
    pub fn iter(&self) -> std::slice::Iter<'_, LookupError> {
        self.0.iter()
    }
}

impl fmt::Display for LookupErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for LookupErrors {}

impl<'a> IntoIterator for &'a LookupErrors {
    type Item = &'a LookupError;
    type IntoIter = std::slice::Iter<'a, LookupError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
