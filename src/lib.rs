//! Generate, import, list and compare PDF business quotes ("preventivi")
//! kept in a single JSON archive.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod platform;
pub mod quote;
pub mod render;
pub mod report;
pub mod store;

pub use error::{Error, Result};
