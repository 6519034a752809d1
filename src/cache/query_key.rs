use std::fmt;

/// Logical key of a cached query
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum QueryKey {
    /// The whole user directory (`GET /users`)
    AllUsers,
    /// A single user (`GET /users/{id}`)
    User(u32),
    /// Posts written by a user (`GET /posts?userId={id}`)
    PostsByUser(u32),
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::AllUsers => write!(f, "all users"),
            QueryKey::User(id) => write!(f, "user #{}", id),
            QueryKey::PostsByUser(id) => write!(f, "posts for user #{}", id),
        }
    }
}
