//! Command implementations for the mpbrun CLI

pub mod completions;
pub mod list;
pub mod run;
pub mod show;
pub mod tool;
pub mod version;
