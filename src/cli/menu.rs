//! Interactive numbered-menu session
//!
//! Reproduces the classic course-planner flow: load the catalog, print
//! the ordered list, look up one course, exit. Invalid selections
//! re-prompt from a read loop (one line per attempt, no recursion) and
//! EOF ends the session cleanly. Reader and writer are injected so
//! sessions can be scripted in tests.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::application::CatalogService;
use crate::domain::CourseCatalog;

/// Run a menu session until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    service: &CatalogService,
    catalog_path: &Path,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    debug!("menu session: catalog={}", catalog_path.display());
    let mut catalog = CourseCatalog::new();

    writeln!(out, "Welcome to the course planner.")?;

    loop {
        write_menu(out)?;

        let Some(selection) = read_line(input)? else {
            writeln!(out)?;
            break;
        };

        match selection.trim() {
            "1" => load(service, catalog_path, &mut catalog, out)?,
            "2" => print_course_list(&catalog, out)?,
            "3" => print_course(&catalog, input, out)?,
            "9" => {
                writeln!(out, "Thank you for using the course planner!")?;
                break;
            }
            "" => {}
            other => {
                writeln!(out, "{} is not a valid menu option.", other)?;
            }
        }
    }

    Ok(())
}

fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  1. Load catalog")?;
    writeln!(out, "  2. Print course list")?;
    writeln!(out, "  3. Print course")?;
    writeln!(out, "  9. Exit")?;
    writeln!(out)?;
    write!(out, "What would you like to do? ")?;
    out.flush()
}

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn load<W: Write>(
    service: &CatalogService,
    path: &Path,
    catalog: &mut CourseCatalog,
    out: &mut W,
) -> io::Result<()> {
    // Re-loading replaces the previous catalog rather than layering on top.
    catalog.clear();

    match service.load_into(path, catalog) {
        Ok(report) => {
            writeln!(
                out,
                "Loaded {} courses from {}.",
                report.inserted,
                path.display()
            )?;
            if report.duplicates > 0 {
                writeln!(
                    out,
                    "Dropped {} duplicate rows (first entry wins).",
                    report.duplicates
                )?;
            }
        }
        Err(e) => {
            writeln!(out, "The catalog could not be loaded: {}", e)?;
        }
    }
    Ok(())
}

fn print_course_list<W: Write>(catalog: &CourseCatalog, out: &mut W) -> io::Result<()> {
    if catalog.is_empty() {
        writeln!(out, "The course list is empty. Please load the catalog first.")?;
        return Ok(());
    }

    writeln!(out, "Course List:")?;
    for course in catalog.iter() {
        writeln!(out, "{}", course)?;
    }
    Ok(())
}

fn print_course<R: BufRead, W: Write>(
    catalog: &CourseCatalog,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    if catalog.is_empty() {
        writeln!(out, "The course list is empty. Please load the catalog first.")?;
        return Ok(());
    }

    write!(out, "Enter the course name: ")?;
    out.flush()?;

    let Some(name) = read_line(input)? else {
        writeln!(out)?;
        return Ok(());
    };
    let name = name.trim();

    match catalog.find(name) {
        Some(course) => {
            writeln!(out, "{}", course)?;
            writeln!(out, "Prerequisites: {}", course.prerequisites_line())?;
        }
        None => {
            writeln!(out, "Course {} not found.", name)?;
        }
    }
    Ok(())
}
