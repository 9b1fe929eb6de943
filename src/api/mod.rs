//! API Module
//!
//! - commands.rs: entry points consumed by front-ends

pub mod commands;

pub use commands::*;
