//! Command-line interface for Thesaurize.

pub mod args;
pub mod commands;
