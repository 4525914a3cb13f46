//! # featmatrix-cli
//!
//! Terminal rendering shell for the Featmatrix comparison dataset.
//!
//! This crate provides:
//! - Summary and per-category comparison tables
//! - Feature and category listings
//! - Single-cell and any-competitor support queries
//! - Data-integrity validation
//! - Config file management

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod logging;
pub mod render;
pub mod view;

pub use app::App;
pub use config::{CliConfig, OutputFormat};
pub use error::{Error, Result};
pub use view::View;
