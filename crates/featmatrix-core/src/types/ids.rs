//! Stable identifiers for features.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalize a display name into a feature slug.
///
/// Performs the following transformations:
/// 1. Lowercases ASCII letters
/// 2. Keeps ASCII alphanumerics
/// 3. Collapses every other run of characters into a single hyphen
/// 4. Trims leading/trailing hyphens
///
/// # Examples
///
/// ```
/// use featmatrix_core::types::ids::slugify;
///
/// assert_eq!(slugify("Omni-channel"), "omni-channel");
/// assert_eq!(slugify("A/B Testing"), "a-b-testing");
/// assert_eq!(slugify("Compliance & Security"), "compliance-security");
/// assert_eq!(slugify("  LLM Cost   Optimization "), "llm-cost-optimization");
/// ```
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<String>>()
        .join("-")
}

/// Identifier of a feature, derived from its display name.
///
/// Per-company support maps are keyed by `FeatureId`, so lookups never
/// depend on the position of a feature in the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    /// Derives the id for a feature name.
    ///
    /// # Examples
    ///
    /// ```
    /// use featmatrix_core::FeatureId;
    ///
    /// let id = FeatureId::from_name("Live chat handover");
    /// assert_eq!(id.as_str(), "live-chat-handover");
    /// ```
    pub fn from_name(name: &str) -> Self {
        Self(slugify(name))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FeatureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
