//! Library surface of the compendium CLI, kept separate from the binary so
//! command logic stays testable.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
