/// Shared utilities used across every layer
pub mod debounce;
pub mod error;
pub mod logging;
mod result;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use error::{DirectoryError, ExitCode, FetchError};
pub use result::Result;
