//! Typed lookup of named objects.
//!
//! UI description files (GtkBuilder XML and the like) produce a bag of
//! objects addressed by id. [`Lookup`] fetches them with the expected type
//! and, instead of failing on the first problem, records every missing or
//! mistyped id so a whole interface can be wired up and checked once.
//!
//! ```rust,ignore
//! let mut ui = Lookup::new(objects);
//! let quit: Option<Button> = ui.get("quit");
//! let title: Option<Label> = ui.get("title");
//! ui.into_result()?;
//! ```

mod error;
mod source;

pub use error::{LookupError, LookupErrors};
pub use source::{ObjectMap, ObjectSource};

use std::any::{Any, type_name};

/// Typed accessor over an [`ObjectSource`] that accumulates errors.
pub struct Lookup<S> {
    source: S,
    errors: LookupErrors,
}

impl<S: ObjectSource> Lookup<S> {
    /// Starts a lookup over `source` with no recorded errors.
    pub fn new(source: S) -> Self {
        Self {
            source,
            errors: LookupErrors::default(),
        }
    }

    /// Returns a clone of the object named `name` as a `T`.
    ///
    /// Records [`LookupError::NotFound`] when no such object exists and
    /// [`LookupError::BadType`] when it is not a `T`; returns `None` in both
    /// cases.
    pub fn get<T: Any + Clone>(&mut self, name: &str) -> Option<T> {
        let kind = short_type_name::<T>();

        let Some(object) = self.source.object(name) else {
            self.errors.push(LookupError::NotFound {
                key: name.to_string(),
                kind,
            });
            return None;
        };

        match object.downcast_ref::<T>() {
            Some(value) => Some(value.clone()),
            None => {
                self.errors.push(LookupError::BadType {
                    key: name.to_string(),
                    kind,
                });
                None
            }
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &LookupErrors {
        &self.errors
    }

    /// The wrapped source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// `Ok` when every lookup succeeded, otherwise all recorded errors.
    pub fn into_result(self) -> Result<(), LookupErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Last path segment of `T`'s name, without generic arguments.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
