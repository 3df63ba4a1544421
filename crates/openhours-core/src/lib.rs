//! Shared building blocks for the opening-hours workspace: grammar constants,
//! the core error type and configuration loading.

pub mod config;
pub mod constants;
pub mod error;
