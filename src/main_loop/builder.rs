use super::MainLoop;
use crate::error::Result;

/// Builder for configuring and creating a [`MainLoop`].
///
/// # Examples
///
/// ```rust,ignore
/// let mut main_loop = MainLoopBuilder::new()
///     .name("ui")
///     .build()?;
/// ```
pub struct MainLoopBuilder {
    /// Name shown in log records.
    name: String,
}

impl MainLoopBuilder {
    /// Creates a builder with the default configuration.
    ///
    /// The default name is `"main"`.
    pub fn new() -> Self {
        Self {
            name: String::from("main"),
        }
    }

    /// Sets the name used in log records and returned by
    /// [`LoopHandle::name`](super::LoopHandle::name).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds the loop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the OS wake primitive
    /// cannot be created (e.g. the process is out of file descriptors).
    pub fn build(self) -> Result<MainLoop> {
        MainLoop::new(self.name)
    }
}

impl Default for MainLoopBuilder {
    fn default() -> Self {
        Self::new()
    }
}
