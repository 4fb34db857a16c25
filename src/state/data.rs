/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the fetch layer and the UI layer.

use serde::Deserialize;

/// Represents a single product fetched from the remote API
///
/// Products are immutable once fetched. The API may omit `category`,
/// `description`, or `images` entirely; all three default so a sparse
/// product is valid input, never an error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Unique product ID
    pub id: i64,
    /// Product title (the only searched field)
    pub title: String,
    /// Price in whole currency units
    pub price: f64,
    /// Product category, if the API provided one
    #[serde(default)]
    pub category: Option<Category>,
    /// Free-text description shown in the hover tooltip
    #[serde(default)]
    pub description: Option<String>,
    /// Image URLs, possibly empty
    #[serde(default)]
    pub images: Vec<String>,
}

/// A product category. Only the name is used; any other
/// fields the API sends are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub name: String,
}

/// The table columns that support sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Title,
    Price,
    Category,
}

/// Sort direction for the active column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction (used when re-clicking the active column)
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort: one column and one direction.
/// At most one sort is active at a time; the table starts unsorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on the given column (the state a freshly
    /// selected column starts in)
    pub fn ascending(column: SortColumn) -> Self {
        SortSpec {
            column,
            direction: SortDirection::Ascending,
        }
    }
}
