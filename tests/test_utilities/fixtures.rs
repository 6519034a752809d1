use user_directory::prelude::*;

/// Builds a user with the fields the directory filters look at
pub fn user(id: u32, name: &str, email: &str, city: &str, company: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: name.split_whitespace().next().unwrap_or(name).to_string(),
        email: email.to_string(),
        phone: "1-770-736-8031 x56442".to_string(),
        website: "hildegard.org".to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: city.to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        company: Company {
            name: company.to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

pub fn post(id: u32, user_id: u32, title: &str) -> Post {
    Post {
        id,
        user_id,
        title: title.to_string(),
        body: format!("{} body", title),
    }
}

/// The first three users of the public placeholder directory
pub fn sample_directory() -> Vec<User> {
    vec![
        user(1, "Leanne Graham", "Sincere@april.biz", "Gwenborough", "Romaguera-Crona"),
        user(2, "Ervin Howell", "Shanna@melissa.tv", "Wisokyburgh", "Deckow-Crist"),
        user(3, "Clementine Bauch", "Nathan@yesenia.net", "McKenziehaven", "Romaguera-Jacobson"),
    ]
}
