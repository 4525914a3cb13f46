//! Competitor categories and their display information.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CategoryId enum
// ============================================================================

/// One of the fixed buckets of companies in the comparison.
///
/// `Vendor` is the distinguished singleton holding the vendor itself;
/// the other variants are competitor categories.
///
/// # Example
///
/// ```rust
/// use featmatrix_core::CategoryId;
///
/// let cloud: CategoryId = "cloud".parse().unwrap();
/// assert_eq!(cloud, CategoryId::Cloud);
/// assert!(!cloud.is_vendor());
/// assert!("unknown".parse::<CategoryId>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    /// Foundation model platform companies.
    Platform,
    /// Hyperscale cloud providers.
    Cloud,
    /// Conversational AI solution providers.
    Solution,
    /// The vendor being compared against everyone else.
    #[serde(rename = "keyreply")]
    Vendor,
}

impl CategoryId {
    /// Competitor categories in display order.
    pub const COMPETITORS: [CategoryId; 3] =
        [CategoryId::Platform, CategoryId::Cloud, CategoryId::Solution];

    /// Every category in display order, vendor last.
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Platform,
        CategoryId::Cloud,
        CategoryId::Solution,
        CategoryId::Vendor,
    ];

    /// Stable key used on the command line and in serialized output.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Cloud => "cloud",
            Self::Solution => "solution",
            Self::Vendor => "keyreply",
        }
    }

    /// Position of this category in [`CategoryId::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Returns `true` for the vendor singleton category.
    pub fn is_vendor(&self) -> bool {
        matches!(self, Self::Vendor)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CategoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CategoryId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| Error::unknown_category(s))
    }
}

// ============================================================================
// CategoryInfo
// ============================================================================

/// Display information for a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Category this info describes.
    pub id: CategoryId,
    /// Human-readable name, e.g. "Cloud Providers".
    pub name: String,
    /// Example company names. Decorative only.
    pub examples: Vec<String>,
}

impl CategoryInfo {
    /// Creates category display info.
    pub fn new<N, I, E>(id: CategoryId, name: N, examples: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = E>,
        E: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            examples: examples.into_iter().map(Into::into).collect(),
        }
    }

    /// Default display info for a category.
    pub fn default_for(id: CategoryId) -> Self {
        match id {
            CategoryId::Platform => {
                Self::new(id, "Platform Companies", ["OpenAI", "Anthropic", "Meta"])
            }
            CategoryId::Cloud => Self::new(id, "Cloud Providers", ["Azure", "AWS", "Google Cloud"]),
            CategoryId::Solution => {
                Self::new(id, "Solution Providers", ["KoreAI", "Haptik", "YellowAI"])
            }
            CategoryId::Vendor => Self::new(id, "KeyReply", ["KeyReply"]),
        }
    }
}
