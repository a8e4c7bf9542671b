//! Tests for the interactive menu: scripted stdin/stdout sessions.

use std::path::Path;
use std::sync::Arc;

use tempfile::TempDir;

use coursecat::application::CatalogService;
use coursecat::cli::menu;
use coursecat::infrastructure::RealFileSystem;

const SAMPLE: &str = "tests/resources/catalog/courses.csv";

/// Drive one menu session from a script, returning everything written.
fn run_session(catalog_path: &Path, script: &str) -> String {
    let service = CatalogService::new(Arc::new(RealFileSystem));
    let mut input = script.as_bytes();
    let mut out = Vec::new();

    menu::run(&service, catalog_path, &mut input, &mut out).expect("menu session should not fail");

    String::from_utf8(out).expect("menu output should be utf8")
}

/// The course lines printed after a "Course List:" header.
fn course_list_lines(output: &str) -> Vec<String> {
    let lines: Vec<&str> = output.lines().collect();
    let start = lines
        .iter()
        .position(|l| *l == "Course List:")
        .expect("output should contain a course list header");
    lines[start + 1..]
        .iter()
        .take_while(|l| l.contains(", "))
        .map(|l| l.to_string())
        .collect()
}

// ============================================================
// Session lifecycle
// ============================================================

#[test]
fn given_exit_selection_when_running_then_greets_and_says_goodbye() {
    let output = run_session(Path::new(SAMPLE), "9\n");

    assert!(output.starts_with("Welcome to the course planner.\n"));
    assert!(output.contains("What would you like to do? "));
    assert!(output.contains("Thank you for using the course planner!"));
}

#[test]
fn given_end_of_input_when_running_then_session_ends_without_goodbye() {
    let output = run_session(Path::new(SAMPLE), "");

    assert!(output.contains("Welcome to the course planner."));
    assert!(!output.contains("Thank you for using the course planner!"));
}

#[test]
fn given_invalid_selection_when_running_then_reprompts() {
    let output = run_session(Path::new(SAMPLE), "7\nfoo\n9\n");

    assert!(output.contains("7 is not a valid menu option."));
    assert!(output.contains("foo is not a valid menu option."));
    // Session survives bad input all the way to a clean exit
    assert!(output.contains("Thank you for using the course planner!"));
}

#[test]
fn given_blank_selection_when_running_then_menu_shows_again() {
    let output = run_session(Path::new(SAMPLE), "\n9\n");

    assert!(!output.contains("is not a valid menu option."));
    assert_eq!(output.matches("What would you like to do? ").count(), 2);
}

// ============================================================
// Guards before a successful load
// ============================================================

#[test]
fn given_list_before_load_when_selected_then_guard_message() {
    let output = run_session(Path::new(SAMPLE), "2\n9\n");

    assert!(output.contains("The course list is empty. Please load the catalog first."));
    assert!(!output.contains("Course List:"));
}

#[test]
fn given_lookup_before_load_when_selected_then_guard_without_prompt() {
    let output = run_session(Path::new(SAMPLE), "3\n9\n");

    assert!(output.contains("The course list is empty. Please load the catalog first."));
    assert!(!output.contains("Enter the course name:"));
}

// ============================================================
// Load, list, look up
// ============================================================

#[test]
fn given_load_then_list_when_selected_then_courses_in_name_order() {
    let output = run_session(Path::new(SAMPLE), "1\n2\n9\n");

    assert!(output.contains("Loaded 8 courses from"));
    assert_eq!(
        course_list_lines(&output),
        vec![
            "CSCI100, Introduction to Computer Science",
            "CSCI101, Introduction to Programming in C++",
            "CSCI200, Data Structures",
            "CSCI300, Introduction to Algorithms",
            "CSCI301, Advanced Programming in C++",
            "CSCI350, Operating Systems",
            "CSCI400, Large Software Development",
            "MATH201, Discrete Mathematics"
        ]
    );
}

#[test]
fn given_loaded_catalog_when_looking_up_course_then_prints_prerequisites() {
    let output = run_session(Path::new(SAMPLE), "1\n3\nCSCI400\n9\n");

    assert!(output.contains("Enter the course name: "));
    assert!(output.contains("CSCI400, Large Software Development"));
    assert!(output.contains("Prerequisites: CSCI301, CSCI350"));
}

#[test]
fn given_loaded_catalog_when_looking_up_lowercase_then_still_found() {
    let output = run_session(Path::new(SAMPLE), "1\n3\ncsci100\n9\n");

    assert!(output.contains("CSCI100, Introduction to Computer Science"));
    assert!(output.contains("Prerequisites: none"));
}

#[test]
fn given_loaded_catalog_when_looking_up_unknown_then_not_found_message() {
    let output = run_session(Path::new(SAMPLE), "1\n3\nCSCI999\n9\n");

    assert!(output.contains("Course CSCI999 not found."));
}

#[test]
fn given_second_load_when_selected_then_catalog_is_replaced_not_stacked() {
    let output = run_session(Path::new(SAMPLE), "1\n1\n2\n9\n");

    assert_eq!(output.matches("Loaded 8 courses from").count(), 2);
    // A re-load must not report or keep duplicate entries
    assert!(!output.contains("duplicate"));
    assert_eq!(course_list_lines(&output).len(), 8);
}

// ============================================================
// Load failures inside a session
// ============================================================

#[test]
fn given_missing_source_when_loading_then_session_continues() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nonexistent.csv");

    let output = run_session(&missing, "1\n9\n");

    assert!(output.contains("The catalog could not be loaded:"));
    assert!(output.contains("not found"));
    assert!(output.contains("Thank you for using the course planner!"));
}

#[test]
fn given_duplicate_rows_when_loading_then_session_reports_drop() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("dupes.csv");
    std::fs::write(
        &path,
        "CSCI200,Data Structures\nCSCI200,Impostor\nMATH201,Discrete Mathematics\n",
    )
    .unwrap();

    let output = run_session(&path, "1\n2\n9\n");

    assert!(output.contains("Loaded 2 courses from"));
    assert!(output.contains("Dropped 1 duplicate"));
    assert_eq!(
        course_list_lines(&output),
        vec!["CSCI200, Data Structures", "MATH201, Discrete Mathematics"]
    );
}
