//! Domain entities: course records and key normalization

use std::fmt;

use itertools::Itertools;

/// A catalog record: course name, description, and prerequisite names.
///
/// Immutable once inserted into the store. The `name` doubles as the
/// ordering/search key and is expected to be uppercased at ingestion
/// (see [`normalize_key`]); the store itself does not re-normalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course name, uppercase, unique within a catalog
    pub name: String,
    /// Free-form description, stored verbatim
    pub description: String,
    /// Prerequisite course names in source order.
    /// Not validated against the catalog: a prerequisite naming a course
    /// that was never loaded is permitted.
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            prerequisites,
        }
    }

    /// One-line prerequisite listing for display, `none` when empty.
    pub fn prerequisites_line(&self) -> String {
        if self.prerequisites.is_empty() {
            "none".to_string()
        } else {
            self.prerequisites.iter().join(", ")
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.description)
    }
}

/// Uppercase a course name into its catalog key form.
///
/// Applied by the loader before insertion and by lookups before descent,
/// so queries match regardless of input case.
pub fn normalize_key(name: &str) -> String {
    name.to_uppercase()
}
