//! xcode-patch - register new source files in an Xcode project
//!
//! This crate inserts file reference, build file, group and sources-phase
//! entries into a `project.pbxproj` by text substitution after known
//! anchor records.

pub mod config;
pub mod document;
pub mod error;
pub mod file_entry;
pub mod identifier;
pub mod passes;
pub mod patcher;
