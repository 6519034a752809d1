use crate::directory::domain::{DirectoryQuery, SortDirection, User};
use crate::directory::policies::NameCollation;

/// ViewPipeline - derives the displayed user list from the fetched list
/// and the list view's [`DirectoryQuery`]
///
/// Pure and idempotent. Steps run in a fixed order, each narrowing the
/// candidates: text search, city, company, then sort by name.
pub struct ViewPipeline;

impl ViewPipeline {
    pub fn derive_view(users: &[User], query: &DirectoryQuery) -> Vec<User> {
        let needle = query.search_text.to_lowercase();

        let mut view: Vec<User> = users
            .iter()
            .filter(|user| Self::matches_search(user, &needle))
            .filter(|user| query.city.admits(&user.address.city))
            .filter(|user| query.company.admits(&user.company.name))
            .cloned()
            .collect();

        Self::sort_by_name(&mut view, query.sort);
        view
    }

    /// Plain case-insensitive substring match on name or email.
    /// `needle` must already be lowercased.
    fn matches_search(user: &User, needle: &str) -> bool {
        needle.is_empty()
            || user.name.to_lowercase().contains(needle)
            || user.email.to_lowercase().contains(needle)
    }

    /// Stable sort, so equal names keep their input order in both directions
    fn sort_by_name(users: &mut [User], direction: SortDirection) {
        match direction {
            SortDirection::Ascending => {
                users.sort_by(|a, b| NameCollation::compare(&a.name, &b.name))
            }
            SortDirection::Descending => {
                users.sort_by(|a, b| NameCollation::compare(&b.name, &a.name))
            }
        }
    }
}
