//! `Result` adapters onto the domain error
//!
//! Foreign errors (figment, `std::io`, toml) get a message prefix and land
//! in the matching [`Error`] variant, keeping the original as the source
//! where the variant has one.

use std::fmt::Display;

use relcon_domain::error::{Error, Result};

/// Attach a message to a foreign error
///
/// ```ignore
/// use relcon_infrastructure::error_ext::ErrorContext;
///
/// let text = std::fs::read_to_string(&path)
///     .io_context(format!("read {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// As [`Error::Internal`]
    fn context(self, message: impl Display) -> Result<T>;

    /// As [`Error::Internal`], building the message only on failure
    fn with_context<M: Display>(self, message: impl FnOnce() -> M) -> Result<T>;

    /// As [`Error::Io`]
    fn io_context(self, message: impl Display) -> Result<T>;

    /// As [`Error::Config`]; the CLI exits 2 on these
    fn config_context(self, message: impl Display) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, message: impl Display) -> Result<T> {
        self.map_err(|e| Error::internal(format!("{message}: {e}")))
    }

    fn with_context<M: Display>(self, message: impl FnOnce() -> M) -> Result<T> {
        self.map_err(|e| Error::internal(format!("{}: {e}", message())))
    }

    fn io_context(self, message: impl Display) -> Result<T> {
        self.map_err(|e| Error::io_with_source(format!("{message}: {e}"), e))
    }

    fn config_context(self, message: impl Display) -> Result<T> {
        self.map_err(|e| Error::configuration_with_source(format!("{message}: {e}"), e))
    }
}
