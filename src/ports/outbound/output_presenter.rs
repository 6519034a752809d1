use crate::shared::Result;

/// OutputPresenter port for presenting rendered views
///
/// This port abstracts the output destination where a formatted list or
/// detail view is shown.
pub trait OutputPresenter {
    /// Presents the formatted view
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
