//! Error types for featmatrix-core.

use thiserror::Error;

/// Result type alias for featmatrix-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or querying a comparison dataset.
///
/// Query errors (`UnknownCategory`, `UnknownCompany`, `FeatureNotFound`)
/// are precondition violations against static data. The remaining
/// variants are reported by [`DatasetBuilder::build`](crate::DatasetBuilder::build)
/// when the data itself is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Category key is not one of the known competitor or vendor categories.
    #[error("Unknown category: {name}")]
    UnknownCategory {
        /// Key that failed to resolve
        name: String,
    },

    /// Company is not listed under the given category.
    #[error("Unknown company '{company}' in category '{category}'")]
    UnknownCompany {
        /// Category that was searched
        category: String,
        /// Company name that was not found
        company: String,
    },

    /// No feature with this exact name exists in the taxonomy.
    #[error("Feature not found: {name}")]
    FeatureNotFound {
        /// Feature name that was not found
        name: String,
    },

    /// Two features share a name (or a derived id).
    #[error("Duplicate feature: {name}")]
    DuplicateFeature {
        /// Offending feature name
        name: String,
    },

    /// Two companies share a name within one category.
    #[error("Duplicate company '{company}' in category '{category}'")]
    DuplicateCompany {
        /// Category holding both entries
        category: String,
        /// Offending company name
        company: String,
    },

    /// A positional support row does not line up with the feature list.
    #[error(
        "Support row for '{company}' in category '{category}' has {actual} entries, expected {expected}"
    )]
    RowLengthMismatch {
        /// Category of the row
        category: String,
        /// Company of the row
        company: String,
        /// Number of features in the taxonomy
        expected: usize,
        /// Number of entries supplied
        actual: usize,
    },

    /// The vendor category holds more than one company.
    #[error("Vendor category already has a company; cannot add '{company}'")]
    VendorNotSingleton {
        /// The extra vendor company
        company: String,
    },
}

impl Error {
    /// Creates an unknown category error.
    pub fn unknown_category<S: Into<String>>(name: S) -> Self {
        Error::UnknownCategory { name: name.into() }
    }

    /// Creates an unknown company error.
    pub fn unknown_company<C, N>(category: C, company: N) -> Self
    where
        C: Into<String>,
        N: Into<String>,
    {
        Error::UnknownCompany {
            category: category.into(),
            company: company.into(),
        }
    }

    /// Creates a feature-not-found error.
    pub fn feature_not_found<S: Into<String>>(name: S) -> Self {
        Error::FeatureNotFound { name: name.into() }
    }

    /// Returns whether this error describes malformed dataset contents
    /// rather than a bad query argument.
    pub fn is_integrity(&self) -> bool {
        match self {
            Error::DuplicateFeature { .. } => true,
            Error::DuplicateCompany { .. } => true,
            Error::RowLengthMismatch { .. } => true,
            Error::VendorNotSingleton { .. } => true,
            Error::UnknownCategory { .. } => false,
            Error::UnknownCompany { .. } => false,
            Error::FeatureNotFound { .. } => false,
        }
    }
}
