//! Application layer orchestrating domain logic and infrastructure.

pub mod cli;
pub mod ignore_patterns;
pub mod rewrite;
pub mod scan;
pub mod toggle;
