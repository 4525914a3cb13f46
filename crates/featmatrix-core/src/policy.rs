//! How the vendor's own row is answered.

use serde::{Deserialize, Serialize};

/// Rule applied to queries against the vendor category.
///
/// The comparison presents the vendor as fully capable.
///
/// # Example
///
/// ```rust
/// use featmatrix_core::VendorPolicy;
///
/// let policy = VendorPolicy::default();
/// assert!(policy.resolve(false));
/// assert!(!VendorPolicy::MatrixDriven.resolve(false));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorPolicy {
    /// The vendor supports every feature, whatever its matrix entry says.
    #[default]
    AlwaysSupports,
    /// The vendor's matrix entry is used as-is.
    MatrixDriven,
}

impl VendorPolicy {
    /// Resolve the vendor's answer given the value stored in the matrix.
    pub fn resolve(&self, stored: bool) -> bool {
        match self {
            Self::AlwaysSupports => true,
            Self::MatrixDriven => stored,
        }
    }
}
