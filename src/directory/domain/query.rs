use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A single-select filter: either everything or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Exact, case-sensitive comparison against the selected value.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Selection must not be empty. Use 'all' to disable the filter".to_string());
        }
        if s.eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            Ok(Selection::Only(s.to_string()))
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "all"),
            Selection::Only(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!(
                "Invalid sort direction: {}. Please specify 'asc' or 'desc'",
                s
            )),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "A-Z"),
            SortDirection::Descending => write!(f, "Z-A"),
        }
    }
}

/// DirectoryQuery - the list view's filter state
///
/// Owned by the view and recomputed on every change; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryQuery {
    pub search_text: String,
    pub city: Selection,
    pub company: Selection,
    pub sort: SortDirection,
}

impl DirectoryQuery {
    pub fn new(
        search_text: impl Into<String>,
        city: Selection,
        company: Selection,
        sort: SortDirection,
    ) -> Self {
        Self {
            search_text: search_text.into(),
            city,
            company,
            sort,
        }
    }

    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    /// Whether any filter narrows the list
    pub fn is_filtered(&self) -> bool {
        !self.search_text.is_empty() || self.city != Selection::All || self.company != Selection::All
    }
}
