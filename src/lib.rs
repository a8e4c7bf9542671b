//! Single-user course planner: loads a course catalog from a CSV-style file
//! into an ordered in-memory store and answers listing and lookup queries,
//! either as one-shot commands or through an interactive menu session.
//!
//! Layering follows a simple dependency rule: `domain` knows nothing outside
//! itself, `application` orchestrates domain logic behind I/O boundary traits,
//! `infrastructure` implements those traits, and `cli` wires it all to the
//! terminal.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
