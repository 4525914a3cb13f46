//! Features and their display groupings.

use super::ids::FeatureId;
use serde::Serialize;

/// A named, described capability being compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Slug derived from `name`.
    pub id: FeatureId,
    /// Display name; unique across the whole taxonomy.
    pub name: String,
    /// Tooltip text shown next to the name.
    pub description: String,
}

impl Feature {
    /// Creates a feature, deriving its id from the name.
    ///
    /// # Examples
    ///
    /// ```
    /// use featmatrix_core::Feature;
    ///
    /// let f = Feature::new("Speed", "Zero or Customisable delays for bot response");
    /// assert_eq!(f.id.as_str(), "speed");
    /// ```
    pub fn new<N, D>(name: N, description: D) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        let name = name.into();
        Self {
            id: FeatureId::from_name(&name),
            name,
            description: description.into(),
        }
    }
}

/// An ordered display group of related features.
///
/// Grouping has no effect on lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCategory {
    /// Heading shown above the group.
    pub name: String,
    /// Features in display order.
    pub features: Vec<Feature>,
}

impl FeatureCategory {
    /// Creates a feature category from `(name, description)` pairs.
    pub fn new<N, I, F, D>(name: N, features: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (F, D)>,
        F: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            features: features
                .into_iter()
                .map(|(name, description)| Feature::new(name, description))
                .collect(),
        }
    }
}
