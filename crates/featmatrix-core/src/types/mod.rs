//! Core data model types.

pub mod category;
pub mod company;
pub mod feature;
pub mod ids;

mod proptests;

pub use category::{CategoryId, CategoryInfo};
pub use company::Company;
pub use feature::{Feature, FeatureCategory};
pub use ids::FeatureId;
