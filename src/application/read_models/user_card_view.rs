//! Card view of a single directory entry

use crate::directory::domain::User;
use serde::Serialize;

/// What a card in the list view shows about a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCardView {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
    pub city: String,
    pub company: String,
}

impl From<&User> for UserCardView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            city: user.address.city.clone(),
            company: user.company.name.clone(),
        }
    }
}
