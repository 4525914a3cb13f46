//! Companies and their per-feature support maps.

use super::ids::FeatureId;
use serde::Serialize;
use std::collections::BTreeMap;

/// A company listed under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    /// Name, unique within its category.
    pub name: String,
    /// Support flag for every feature in the taxonomy.
    pub support: BTreeMap<FeatureId, bool>,
}

impl Company {
    /// Support flag for a feature id, `None` if the id is not mapped.
    pub fn supports(&self, id: &FeatureId) -> Option<bool> {
        self.support.get(id).copied()
    }
}
