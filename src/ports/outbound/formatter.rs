use crate::application::read_models::{DirectoryReadModel, ProfileReadModel};
use crate::shared::Result;

/// ViewFormatter port for rendering read models
///
/// One implementation per output format (terminal text, JSON, ...).
pub trait ViewFormatter {
    /// Renders the list view: result counter, filter choices and cards
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_directory(&self, model: &DirectoryReadModel) -> Result<String>;

    /// Renders the detail view of one user with their posts
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_profile(&self, model: &ProfileReadModel) -> Result<String>;
}
