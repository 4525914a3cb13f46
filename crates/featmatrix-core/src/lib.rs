//! Featmatrix Core: feature comparison dataset and support lookups.
//!
//! This crate owns the static feature taxonomy and the per-company
//! support data, and answers pure queries over them. It has no rendering
//! concerns; see `featmatrix-cli` for a terminal renderer.
//!
//! # Modules
//!
//! - [`types`]: Features, categories, companies, and ids
//! - [`dataset`]: [`DatasetBuilder`] and [`ComparisonDataset`]
//! - [`policy`]: How the vendor's own row is answered
//! - [`catalog`]: The built-in KeyReply comparison
//! - [`views`]: Summary and per-category table models
//! - [`error`]: Error types and Result alias

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod policy;
pub mod types;
pub mod views;

// Re-export key types at crate root for convenience
pub use dataset::{ComparisonDataset, DatasetBuilder};
pub use error::{Error, Result};
pub use policy::VendorPolicy;
pub use types::{CategoryId, CategoryInfo, Company, Feature, FeatureCategory, FeatureId};
pub use views::{CategoryView, SummaryView, TableView};
