//! Command handlers for brres CLI
//!
//! Each submodule handles a specific command category.

pub mod configure;
pub mod extract;
pub mod scan;
