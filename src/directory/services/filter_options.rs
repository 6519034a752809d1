use crate::directory::domain::User;
use serde::Serialize;
use std::collections::BTreeSet;

/// Choices offered by the city and company filters
///
/// Built from the full, unfiltered user list. Rebuild it when the list is
/// reloaded, not when the filters change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub companies: Vec<String>,
}

impl FilterOptions {
    /// Distinct cities and company names, each sorted lexicographically
    pub fn from_users(users: &[User]) -> Self {
        let cities: BTreeSet<&str> = users.iter().map(|u| u.address.city.as_str()).collect();
        let companies: BTreeSet<&str> = users.iter().map(|u| u.company.name.as_str()).collect();

        Self {
            cities: cities.into_iter().map(str::to_string).collect(),
            companies: companies.into_iter().map(str::to_string).collect(),
        }
    }
}
