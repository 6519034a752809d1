//! Read model of the list view

use super::UserCardView;
use crate::application::dto::DirectoryResponse;
use crate::directory::domain::DirectoryQuery;
use crate::directory::services::FilterOptions;
use serde::Serialize;

/// Everything the list view renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryReadModel {
    pub query: DirectoryQuery,
    /// Number of cards shown
    pub shown: usize,
    /// Size of the unfiltered directory
    pub total: usize,
    pub filter_options: FilterOptions,
    pub cards: Vec<UserCardView>,
}

impl DirectoryReadModel {
    pub fn from_response(response: &DirectoryResponse) -> Self {
        let cards: Vec<UserCardView> = response.users.iter().map(UserCardView::from).collect();
        Self {
            query: response.query.clone(),
            shown: cards.len(),
            total: response.total,
            filter_options: response.filter_options.clone(),
            cards,
        }
    }

    /// Result counter line, e.g. "Showing 3 of 10 users"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} users", self.shown, self.total)
    }
}
