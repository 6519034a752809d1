use crate::application::read_models::{DirectoryReadModel, ProfileReadModel};
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable output
///
/// Serializes the read models as pretty-printed JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for JsonFormatter {
    fn format_directory(&self, model: &DirectoryReadModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }

    fn format_profile(&self, model: &ProfileReadModel) -> Result<String> {
        Ok(serde_json::to_string_pretty(model)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{DirectoryResponse, PostsOutcome, ProfileResponse};
    use crate::directory::domain::fixtures::user;
    use crate::directory::domain::{DirectoryQuery, Post, SortDirection};
    use crate::directory::services::FilterOptions;
    use serde_json::Value;

    #[test]
    fn test_format_directory_json() {
        let users = vec![user(1, "Leanne Graham", "a@b.c", "Gwenborough", "Acme")];
        let model = DirectoryReadModel::from_response(&DirectoryResponse {
            filter_options: FilterOptions::from_users(&users),
            total: 1,
            users,
            query: DirectoryQuery {
                sort: SortDirection::Descending,
                ..Default::default()
            },
        });

        let output = JsonFormatter::new().format_directory(&model).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["shown"], 1);
        assert_eq!(json["total"], 1);
        assert_eq!(json["query"]["sort"], "descending");
        assert_eq!(json["query"]["city"]["kind"], "all");
        assert_eq!(json["filter_options"]["cities"][0], "Gwenborough");
        assert_eq!(json["cards"][0]["email"], "a@b.c");
    }

    #[test]
    fn test_format_profile_json() {
        let model = ProfileReadModel::from_response(&ProfileResponse {
            user: user(1, "Leanne Graham", "a@b.c", "Gwenborough", "Acme"),
            posts: PostsOutcome::Loaded(vec![Post {
                id: 7,
                user_id: 1,
                title: "magnam facilis autem".to_string(),
                body: "dolore placeat quibusdam".to_string(),
            }]),
        });

        let output = JsonFormatter::new().format_profile(&model).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["name"], "Leanne Graham");
        assert_eq!(json["company"]["catchPhrase"], "Multi-layered client-server neural-net");
        assert_eq!(json["posts"][0]["id"], 7);
        assert_eq!(json["posts"][0]["excerpt"], "dolore placeat quibusdam");
    }
}
