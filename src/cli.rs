use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use user_directory::application::dto::OutputFormat;
use user_directory::directory::domain::{DirectoryQuery, Selection, SortDirection};

/// Browse, search and inspect a remote user directory
#[derive(Parser, Debug)]
#[command(name = "user-directory")]
#[command(version)]
#[command(about = "Browse, search and inspect a remote user directory", long_about = None)]
pub struct Args {
    /// Base URL of the directory API (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Path to a config file (defaults to ./user-directory.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List users, optionally searched, filtered and sorted
    List(ListArgs),

    /// Show a user's profile and posts
    Show {
        /// User id
        id: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Interactive list: every input line replaces the search text.
    /// Commands: :sort, :city <name|all>, :company <name|all>, :retry, :quit
    Browse(FilterArgs),
}

/// Filters shared by `list` and `browse`
#[derive(ClapArgs, Debug, Clone)]
pub struct FilterArgs {
    /// Only users living in this city ("all" for every city)
    #[arg(long, default_value = "all")]
    pub city: Selection,

    /// Only users working for this company ("all" for every company)
    #[arg(long, default_value = "all")]
    pub company: Selection,

    /// Sort by name: asc or desc
    #[arg(long, default_value = "asc")]
    pub sort: SortDirection,
}

impl FilterArgs {
    pub fn query(&self, search_text: &str) -> DirectoryQuery {
        DirectoryQuery::new(
            search_text,
            self.city.clone(),
            self.company.clone(),
            self.sort,
        )
    }
}

#[derive(ClapArgs, Debug)]
pub struct ListArgs {
    /// Case-insensitive text matched against name and email
    #[arg(short, long, default_value = "")]
    pub search: String,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl ListArgs {
    pub fn query(&self) -> DirectoryQuery {
        self.filters.query(&self.search)
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// One line of input in `browse` mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseInput {
    Quit,
    Retry,
    ToggleSort,
    City(Selection),
    Company(Selection),
    /// Anything else is search text, taken verbatim
    Search(String),
}

impl BrowseInput {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            ":quit" | ":q" => return BrowseInput::Quit,
            ":retry" => return BrowseInput::Retry,
            ":sort" => return BrowseInput::ToggleSort,
            _ => {}
        }

        if let Some(city) = Self::argument_of(trimmed, ":city") {
            return BrowseInput::City(Self::selection(city));
        }
        if let Some(company) = Self::argument_of(trimmed, ":company") {
            return BrowseInput::Company(Self::selection(company));
        }

        BrowseInput::Search(line.to_string())
    }

    /// Text after `command` when the line is that command word, alone or
    /// followed by whitespace
    fn argument_of<'a>(line: &'a str, command: &str) -> Option<&'a str> {
        let rest = line.strip_prefix(command)?;
        (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
    }

    /// A missing argument resets the filter
    fn selection(argument: &str) -> Selection {
        Selection::from_str(argument.trim()).unwrap_or_default()
    }
}
