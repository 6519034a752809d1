use crate::application::read_models::{DirectoryReadModel, ProfileReadModel, UserCardView};
use crate::directory::domain::Selection;
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Shown when a user has no posts or they could not be loaded
pub const NO_POSTS_MESSAGE: &str = "No posts yet.";

/// Shown when no user matches the current filters
pub const NO_MATCHES_MESSAGE: &str = "No users match the current filters.";

/// Shown when the directory itself has no users
pub const EMPTY_DIRECTORY_MESSAGE: &str = "The directory is empty.";

/// TextFormatter adapter for rendering views in a terminal
///
/// Implements the ViewFormatter port as plain text: one block per user
/// card in the list view, and sectioned profile output in the detail view.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn describe_selection(label: &str, selection: &Selection) -> String {
        match selection {
            Selection::All => format!("{}: all", label),
            Selection::Only(value) => format!("{}: {}", label, value),
        }
    }

    fn write_card(out: &mut String, card: &UserCardView) -> std::fmt::Result {
        writeln!(out, "#{:<3} {} (@{})", card.id, card.name, card.username)?;
        writeln!(out, "     {}", card.email)?;
        writeln!(out, "     {} · {}", card.city, card.company)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewFormatter for TextFormatter {
    fn format_directory(&self, model: &DirectoryReadModel) -> Result<String> {
        let mut out = String::new();
        let query = &model.query;

        writeln!(out, "{}", model.summary())?;
        writeln!(
            out,
            "Search: \"{}\" | {} | {} | Sort: {}",
            query.search_text,
            Self::describe_selection("City", &query.city),
            Self::describe_selection("Company", &query.company),
            query.sort
        )?;
        writeln!(out, "Cities: {}", model.filter_options.cities.join(", "))?;
        writeln!(
            out,
            "Companies: {}",
            model.filter_options.companies.join(", ")
        )?;
        writeln!(out)?;

        if model.cards.is_empty() {
            let message = if query.is_filtered() {
                NO_MATCHES_MESSAGE
            } else {
                EMPTY_DIRECTORY_MESSAGE
            };
            writeln!(out, "{}", message)?;
        }
        for card in &model.cards {
            Self::write_card(&mut out, card)?;
            writeln!(out)?;
        }

        Ok(out.trim_end().to_string())
    }

    fn format_profile(&self, model: &ProfileReadModel) -> Result<String> {
        let mut out = String::new();

        writeln!(out, "{} (@{})", model.name, model.username)?;
        writeln!(out, "Email:   {}", model.email)?;
        writeln!(out, "Phone:   {}", model.phone)?;
        writeln!(out, "Website: {}", model.website)?;
        writeln!(out)?;
        writeln!(out, "Company")?;
        writeln!(out, "  {}", model.company.name)?;
        writeln!(out, "  \"{}\"", model.company.catch_phrase)?;
        writeln!(out, "  {}", model.company.bs)?;
        writeln!(out)?;
        writeln!(out, "Address")?;
        writeln!(out, "  {}", model.address)?;
        writeln!(out)?;
        writeln!(out, "Posts ({})", model.posts.len())?;

        if model.posts.is_empty() {
            writeln!(out, "  {}", NO_POSTS_MESSAGE)?;
        }
        for post in &model.posts {
            writeln!(out, "  - {}", post.title)?;
            writeln!(out, "    {}", post.excerpt.replace('\n', " "))?;
        }

        Ok(out.trim_end().to_string())
    }
}
