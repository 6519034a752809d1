use crate::directory::domain::{DirectoryQuery, User};
use crate::directory::services::FilterOptions;

/// DirectoryResponse - result of applying a query to the loaded directory
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryResponse {
    /// The derived, ordered list
    pub users: Vec<User>,
    /// Size of the unfiltered directory
    pub total: usize,
    /// Choices for the city and company filters
    pub filter_options: FilterOptions,
    /// The query the list was derived with
    pub query: DirectoryQuery,
}
