//! Catalog loading service
//!
//! Reads the delimited course source and feeds the ordered store one
//! record per row. Row format: `name,description[,prereq...]`; the
//! first two fields are mandatory, everything after is a prerequisite.
//! Empty fields are dropped before positional assignment and a trailing
//! carriage return is stripped, so CRLF sources load cleanly.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::error_ext::IoResultExt;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{normalize_key, Course, CourseCatalog};
use crate::infrastructure::traits::FileSystem;

/// Per-load counters, returned alongside the populated store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Courses inserted into the store
    pub inserted: usize,
    /// Rows dropped because their key was already present (first insert wins)
    pub duplicates: usize,
    /// Physical lines read from the source, blank lines included
    pub lines: usize,
}

/// Output from loading a catalog source.
#[derive(Debug)]
pub struct LoadedCatalog {
    /// The populated ordered store
    pub catalog: CourseCatalog,
    /// Counters for this load
    pub report: LoadReport,
}

/// Service for loading course catalogs from delimited text sources.
pub struct CatalogService {
    fs: Arc<dyn FileSystem>,
}

impl CatalogService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load a catalog source into a fresh store.
    pub fn load(&self, path: &Path) -> ApplicationResult<LoadedCatalog> {
        let mut catalog = CourseCatalog::new();
        let report = self.load_into(path, &mut catalog)?;
        Ok(LoadedCatalog { catalog, report })
    }

    /// Load a catalog source into a caller-owned store.
    ///
    /// Each parsed row is inserted independently: a malformed row aborts
    /// the load with its line number, but rows inserted before it stay in
    /// the store. Duplicate keys are dropped (first insert wins), counted,
    /// and logged at WARN.
    pub fn load_into(
        &self,
        path: &Path,
        catalog: &mut CourseCatalog,
    ) -> ApplicationResult<LoadReport> {
        debug!("load_into: path={}", path.display());

        if !self.fs.exists(path) {
            return Err(ApplicationError::CatalogNotFound(path.to_path_buf()));
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read catalog", path)?;

        let mut report = LoadReport::default();

        for (line_no, line) in content.lines().enumerate() {
            report.lines += 1;

            let fields = split_fields(line);
            if fields.is_empty() {
                continue;
            }
            if fields.len() < 2 {
                return Err(ApplicationError::MalformedRow {
                    path: path.to_path_buf(),
                    line: line_no + 1,
                });
            }

            let course = Course::new(
                normalize_key(fields[0]),
                fields[1],
                fields[2..].iter().map(|s| s.to_string()).collect(),
            );

            if catalog.insert(course) {
                report.inserted += 1;
            } else {
                warn!(
                    "duplicate course name {:?} at {}:{}, keeping first entry",
                    normalize_key(fields[0]),
                    path.display(),
                    line_no + 1
                );
                report.duplicates += 1;
            }
        }

        debug!(
            "load_into: {} inserted, {} duplicates, {} lines",
            report.inserted, report.duplicates, report.lines
        );
        Ok(report)
    }
}

/// Split a row on commas, dropping empty fields and a trailing CR.
///
/// Empty fields vanish before positional assignment, so `,,A,B` and
/// `A,B` parse identically.
fn split_fields(line: &str) -> Vec<&str> {
    line.trim_end_matches('\r')
        .split(',')
        .filter(|field| !field.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_fields_drops_empty_fields_before_positions() {
        assert_eq!(split_fields(",,CS101,Intro"), vec!["CS101", "Intro"]);
        assert_eq!(split_fields("CS101,,Intro"), vec!["CS101", "Intro"]);
    }

    #[test]
    fn split_fields_strips_trailing_carriage_return() {
        assert_eq!(split_fields("CS101,Intro\r"), vec!["CS101", "Intro"]);
    }

    #[test]
    fn split_fields_keeps_field_content_verbatim() {
        // No trimming inside fields: surrounding spaces survive.
        assert_eq!(split_fields("CS101, Intro "), vec!["CS101", " Intro "]);
    }

    #[test]
    fn split_fields_empty_line_yields_nothing() {
        assert!(split_fields("").is_empty());
        assert!(split_fields(",,,").is_empty());
        assert!(split_fields("\r").is_empty());
    }
}
