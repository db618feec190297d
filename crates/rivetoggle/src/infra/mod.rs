//! Infrastructure adapters for configuration, logging, and remote downloads.

pub mod config;
pub mod download;
pub mod logging;
