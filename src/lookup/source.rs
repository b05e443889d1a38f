use std::any::Any;
use std::collections::HashMap;

/// A collection of objects addressed by name.
///
/// Toolkit bindings implement this over their builder type; [`ObjectMap`]
/// is a plain in-memory version.
pub trait ObjectSource {
    /// The object registered under `name`, if any.
    fn object(&self, name: &str) -> Option<&dyn Any>;
}

impl ObjectSource for HashMap<String, Box<dyn Any>> {
    fn object(&self, name: &str) -> Option<&dyn Any> {
        self.get(name).map(|o| &**o)
    }
}

impl<S: ObjectSource + ?Sized> ObjectSource for &S {
    fn object(&self, name: &str) -> Option<&dyn Any> {
        (**self).object(name)
    }
}

/// In-memory [`ObjectSource`].
#[derive(Default)]
pub struct ObjectMap {
    objects: HashMap<String, Box<dyn Any>>,
}

impl ObjectMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `object` under `name`, replacing any previous one.
    pub fn insert<T: Any>(&mut self, name: impl Into<String>, object: T) {
        self.objects.insert(name.into(), Box::new(object));
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<T: Any>(mut self, name: impl Into<String>, object: T) -> Self {
        self.insert(name, object);
        self
    }

    /// Number of registered objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// `true` when no object is registered.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectSource for ObjectMap {
    fn object(&self, name: &str) -> Option<&dyn Any> {
        self.objects.object(name)
    }
}
