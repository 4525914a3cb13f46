//! The comparison dataset and its validating builder.
//!
//! [`DatasetBuilder`] is the only way to obtain a [`ComparisonDataset`].
//! Every integrity rule (unique feature names, unique companies per
//! category, at most one vendor, fully covered support maps) is checked once in
//! [`DatasetBuilder::build`]; after that the dataset is immutable and
//! all queries are pure reads.
//!
//! # Usage
//!
//! ```rust
//! use featmatrix_core::{CategoryId, DatasetBuilder};
//!
//! let dataset = DatasetBuilder::new()
//!     .feature_category("Core", [("Speed", "Fast replies"), ("Evaluations", "Output quality")])
//!     .company(CategoryId::Cloud, "AWS", ["Speed"])
//!     .company(CategoryId::Vendor, "KeyReply", Vec::<&str>::new())
//!     .build()
//!     .unwrap();
//!
//! assert!(dataset.supports("cloud", "AWS", "Speed").unwrap());
//! assert!(!dataset.supports("cloud", "AWS", "Evaluations").unwrap());
//! assert!(dataset.supports("keyreply", "KeyReply", "Evaluations").unwrap());
//! assert!(!dataset.any_supports("Evaluations").unwrap());
//! ```

use crate::error::{Error, Result};
use crate::policy::VendorPolicy;
use crate::types::{CategoryId, CategoryInfo, Company, Feature, FeatureCategory, FeatureId};
use std::collections::{BTreeMap, HashMap, HashSet};

// ============================================================================
// DatasetBuilder
// ============================================================================

/// How a company's support was declared.
#[derive(Debug, Clone)]
enum SupportSpec {
    /// Names of supported features; everything else is unsupported.
    Supported(Vec<String>),
    /// Legacy positional row aligned to the flattened feature list.
    Row(Vec<bool>),
}

#[derive(Debug, Clone)]
struct PendingCompany {
    category: CategoryId,
    name: String,
    spec: SupportSpec,
}

/// Collects taxonomy and support data, then validates it into a
/// [`ComparisonDataset`].
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    feature_categories: Vec<FeatureCategory>,
    infos: [CategoryInfo; 4],
    companies: Vec<PendingCompany>,
    vendor_policy: VendorPolicy,
}

impl Default for DatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetBuilder {
    /// Creates an empty builder with default category display info and
    /// [`VendorPolicy::AlwaysSupports`].
    pub fn new() -> Self {
        Self {
            feature_categories: Vec::new(),
            infos: CategoryId::ALL.map(CategoryInfo::default_for),
            companies: Vec::new(),
            vendor_policy: VendorPolicy::default(),
        }
    }

    /// Appends a feature category made of `(name, description)` pairs.
    pub fn feature_category<N, I, F, D>(mut self, name: N, features: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (F, D)>,
        F: Into<String>,
        D: Into<String>,
    {
        self.feature_categories
            .push(FeatureCategory::new(name, features));
        self
    }

    /// Replaces the display info of a category.
    pub fn category(mut self, info: CategoryInfo) -> Self {
        let index = info.id.index();
        self.infos[index] = info;
        self
    }

    /// Adds a company that supports exactly the named features.
    pub fn company<N, I, F>(mut self, category: CategoryId, name: N, supported: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.companies.push(PendingCompany {
            category,
            name: name.into(),
            spec: SupportSpec::Supported(supported.into_iter().map(Into::into).collect()),
        });
        self
    }

    /// Adds a company from a positional row aligned to the flattened
    /// feature list. The row length is checked by [`build`](Self::build).
    pub fn company_row<N, I>(mut self, category: CategoryId, name: N, row: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = bool>,
    {
        self.companies.push(PendingCompany {
            category,
            name: name.into(),
            spec: SupportSpec::Row(row.into_iter().collect()),
        });
        self
    }

    /// Sets the rule applied to the vendor category.
    pub fn vendor_policy(mut self, policy: VendorPolicy) -> Self {
        self.vendor_policy = policy;
        self
    }

    /// Validates the collected data and freezes it into a dataset.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateFeature`] if two features share a name or id
    /// - [`Error::DuplicateCompany`] if a category lists a company twice
    /// - [`Error::FeatureNotFound`] if a company names an unknown feature
    /// - [`Error::RowLengthMismatch`] if a positional row is misaligned
    /// - [`Error::VendorNotSingleton`] if more than one vendor company is added
    pub fn build(self) -> Result<ComparisonDataset> {
        self.assemble()
            .inspect(|dataset| {
                log::debug!(
                    "Built comparison dataset: {} features in {} groups, {} companies",
                    dataset.feature_count(),
                    dataset.feature_categories.len(),
                    dataset.matrix.iter().map(Vec::len).sum::<usize>()
                );
            })
            .inspect_err(|e| log::warn!("Comparison data failed integrity check: {e}"))
    }

    fn assemble(self) -> Result<ComparisonDataset> {
        let mut by_name = HashMap::new();
        let mut by_id = HashMap::new();
        let mut order = Vec::new();

        for (c, group) in self.feature_categories.iter().enumerate() {
            for (f, feature) in group.features.iter().enumerate() {
                if by_name.insert(feature.name.clone(), (c, f)).is_some()
                    || by_id.insert(feature.id.to_string(), (c, f)).is_some()
                {
                    return Err(Error::DuplicateFeature {
                        name: feature.name.clone(),
                    });
                }
                order.push(feature.id.clone());
            }
        }

        let mut matrix: [Vec<Company>; 4] = Default::default();
        let mut seen = HashSet::new();

        for pending in self.companies {
            if !seen.insert((pending.category, pending.name.clone())) {
                return Err(Error::DuplicateCompany {
                    category: pending.category.key().to_string(),
                    company: pending.name,
                });
            }
            if pending.category.is_vendor() && !matrix[pending.category.index()].is_empty() {
                return Err(Error::VendorNotSingleton {
                    company: pending.name,
                });
            }

            let support = match pending.spec {
                SupportSpec::Supported(names) => {
                    let mut support: BTreeMap<FeatureId, bool> =
                        order.iter().map(|id| (id.clone(), false)).collect();
                    for name in names {
                        let (c, f) = by_name
                            .get(&name)
                            .copied()
                            .ok_or_else(|| Error::feature_not_found(&name))?;
                        let id = self.feature_categories[c].features[f].id.clone();
                        support.insert(id, true);
                    }
                    support
                }
                SupportSpec::Row(row) => {
                    if row.len() != order.len() {
                        return Err(Error::RowLengthMismatch {
                            category: pending.category.key().to_string(),
                            company: pending.name,
                            expected: order.len(),
                            actual: row.len(),
                        });
                    }
                    order.iter().cloned().zip(row).collect()
                }
            };

            matrix[pending.category.index()].push(Company {
                name: pending.name,
                support,
            });
        }

        Ok(ComparisonDataset {
            feature_categories: self.feature_categories,
            by_name,
            by_id,
            infos: self.infos,
            matrix,
            vendor_policy: self.vendor_policy,
        })
    }
}

// ============================================================================
// ComparisonDataset
// ============================================================================

/// Static feature taxonomy plus per-company support data.
///
/// Immutable once built; safe to share across threads without locking.
#[derive(Debug, Clone)]
pub struct ComparisonDataset {
    feature_categories: Vec<FeatureCategory>,
    by_name: HashMap<String, (usize, usize)>,
    by_id: HashMap<String, (usize, usize)>,
    infos: [CategoryInfo; 4],
    matrix: [Vec<Company>; 4],
    vendor_policy: VendorPolicy,
}

impl ComparisonDataset {
    // ------------------------------------------------------------------------
    // Taxonomy
    // ------------------------------------------------------------------------

    /// Every feature paired with the name of its feature category, in
    /// display order.
    pub fn list_features(&self) -> Vec<(&str, &Feature)> {
        self.feature_categories
            .iter()
            .flat_map(|group| {
                group
                    .features
                    .iter()
                    .map(move |feature| (group.name.as_str(), feature))
            })
            .collect()
    }

    /// Feature categories in display order.
    pub fn feature_categories(&self) -> &[FeatureCategory] {
        &self.feature_categories
    }

    /// Flattened, order-preserving iterator over all features.
    pub fn all_features(&self) -> impl Iterator<Item = &Feature> {
        self.feature_categories
            .iter()
            .flat_map(|group| group.features.iter())
    }

    /// Total number of features across all categories.
    pub fn feature_count(&self) -> usize {
        self.by_name.len()
    }

    /// Looks up a feature by its exact, case-sensitive name.
    pub fn feature(&self, name: &str) -> Result<&Feature> {
        self.by_name
            .get(name)
            .and_then(|pos| self.at(*pos))
            .ok_or_else(|| Error::feature_not_found(name))
    }

    /// Looks up a feature by id.
    pub fn feature_by_id(&self, id: &str) -> Option<&Feature> {
        self.by_id.get(id).and_then(|pos| self.at(*pos))
    }

    /// Looks up a feature by exact name, falling back to an exact id match.
    pub fn resolve_feature(&self, name_or_id: &str) -> Result<&Feature> {
        self.feature(name_or_id)
            .or_else(|err| self.feature_by_id(name_or_id).ok_or(err))
    }

    fn at(&self, (c, f): (usize, usize)) -> Option<&Feature> {
        self.feature_categories.get(c)?.features.get(f)
    }

    // ------------------------------------------------------------------------
    // Categories and companies
    // ------------------------------------------------------------------------

    /// Display info for every category, vendor last.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryInfo> {
        self.infos.iter()
    }

    /// Display info for one category.
    pub fn category_info(&self, id: CategoryId) -> &CategoryInfo {
        &self.infos[id.index()]
    }

    /// Resolves a category key such as `"cloud"`.
    pub fn category(&self, key: &str) -> Result<CategoryId> {
        key.parse()
    }

    /// Companies of a category in declaration order.
    pub fn companies(&self, id: CategoryId) -> &[Company] {
        &self.matrix[id.index()]
    }

    /// Looks up a company within a category.
    pub fn company(&self, id: CategoryId, name: &str) -> Result<&Company> {
        self.companies(id)
            .iter()
            .find(|company| company.name == name)
            .ok_or_else(|| Error::unknown_company(id.key(), name))
    }

    /// Rule applied to the vendor category.
    pub fn vendor_policy(&self) -> VendorPolicy {
        self.vendor_policy
    }

    // ------------------------------------------------------------------------
    // Support queries
    // ------------------------------------------------------------------------

    /// Whether `company` in the category keyed `category` supports the
    /// feature named `feature`.
    ///
    /// Arguments are checked in order: category, company, feature.
    pub fn supports(&self, category: &str, company: &str, feature: &str) -> Result<bool> {
        self.supports_in(self.category(category)?, company, feature)
    }

    /// Typed variant of [`supports`](Self::supports).
    pub fn supports_in(&self, category: CategoryId, company: &str, feature: &str) -> Result<bool> {
        let company = self.company(category, company)?;
        let feature = self.feature(feature)?;
        let stored = company.supports(&feature.id).unwrap_or(false);

        if category.is_vendor() {
            Ok(self.vendor_policy.resolve(stored))
        } else {
            Ok(stored)
        }
    }

    /// Whether any company in one category supports the feature.
    ///
    /// The vendor category is answered through the [`VendorPolicy`].
    pub fn category_supports(&self, category: CategoryId, feature: &str) -> Result<bool> {
        let feature = self.feature(feature)?;
        let stored = self.any_company_supports(category, &feature.id);

        if category.is_vendor() {
            Ok(self.vendor_policy.resolve(stored))
        } else {
            Ok(stored)
        }
    }

    /// Whether any competitor, in any competitor category, supports the
    /// feature. The vendor row is never consulted.
    pub fn any_supports(&self, feature: &str) -> Result<bool> {
        let feature = self.feature(feature)?;
        Ok(CategoryId::COMPETITORS
            .iter()
            .any(|id| self.any_company_supports(*id, &feature.id)))
    }

    fn any_company_supports(&self, category: CategoryId, id: &FeatureId) -> bool {
        self.companies(category)
            .iter()
            .any(|company| company.supports(id).unwrap_or(false))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn small() -> DatasetBuilder {
        DatasetBuilder::new()
            .feature_category(
                "Core",
                [
                    ("Omni-channel", "One bot, many channels"),
                    ("Multi-model", "Different LLM models"),
                ],
            )
            .feature_category("Security", [("Compliance & Security", "Standards")])
    }

    #[test]
    fn test_list_features_in_display_order() {
        let dataset = small().build().unwrap();
        let listed: Vec<(&str, &str)> = dataset
            .list_features()
            .into_iter()
            .map(|(group, f)| (group, f.name.as_str()))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("Core", "Omni-channel"),
                ("Core", "Multi-model"),
                ("Security", "Compliance & Security"),
            ]
        );
        assert_eq!(dataset.feature_count(), 3);
    }

    #[test]
    fn test_supports_explicit_map() {
        let dataset = small()
            .company(CategoryId::Platform, "OpenAI", ["Multi-model"])
            .build()
            .unwrap();
        assert!(dataset.supports("platform", "OpenAI", "Multi-model").unwrap());
        assert!(!dataset.supports("platform", "OpenAI", "Omni-channel").unwrap());
    }

    #[test]
    fn test_supports_error_order() {
        let dataset = small()
            .company(CategoryId::Platform, "OpenAI", ["Multi-model"])
            .build()
            .unwrap();
        assert_eq!(
            dataset.supports("unknown", "Nobody", "Nothing"),
            Err(Error::unknown_category("unknown"))
        );
        assert_eq!(
            dataset.supports("platform", "Nobody", "Nothing"),
            Err(Error::unknown_company("platform", "Nobody"))
        );
        assert_eq!(
            dataset.supports("platform", "OpenAI", "Nothing"),
            Err(Error::feature_not_found("Nothing"))
        );
    }

    #[test]
    fn test_feature_lookup_is_case_sensitive() {
        let dataset = small().build().unwrap();
        assert!(dataset.feature("Multi-model").is_ok());
        assert!(dataset.feature("multi-model").is_err());
    }

    #[test]
    fn test_resolve_feature_falls_back_to_id() {
        let dataset = small().build().unwrap();
        assert_eq!(
            dataset.resolve_feature("compliance-security").unwrap().name,
            "Compliance & Security"
        );
        assert_eq!(
            dataset.resolve_feature("Omni-channel").unwrap().name,
            "Omni-channel"
        );
        assert!(dataset.resolve_feature("Compliance-Security").is_err());
        assert!(dataset.resolve_feature("nope").is_err());
    }

    #[test]
    fn test_row_import() {
        let dataset = small()
            .company_row(CategoryId::Cloud, "AWS", [false, true, true])
            .build()
            .unwrap();
        assert!(!dataset.supports("cloud", "AWS", "Omni-channel").unwrap());
        assert!(dataset.supports("cloud", "AWS", "Compliance & Security").unwrap());
    }

    #[test]
    fn test_row_length_mismatch_rejected() {
        let err = small()
            .company_row(CategoryId::Cloud, "AWS", [false, true])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::RowLengthMismatch {
                category: "cloud".to_string(),
                company: "AWS".to_string(),
                expected: 3,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_duplicate_feature_rejected() {
        let err = small()
            .feature_category("Again", [("Multi-model", "dup")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateFeature {
                name: "Multi-model".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_feature_id_rejected() {
        let err = small()
            .feature_category("Again", [("Multi model", "same slug")])
            .build()
            .unwrap_err();
        assert!(err.is_integrity());
    }

    #[test]
    fn test_duplicate_company_rejected() {
        let err = small()
            .company(CategoryId::Solution, "Haptik", ["Omni-channel"])
            .company(CategoryId::Solution, "Haptik", ["Multi-model"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateCompany {
                category: "solution".to_string(),
                company: "Haptik".to_string()
            }
        );
    }

    #[test]
    fn test_second_vendor_rejected() {
        let err = small()
            .company(CategoryId::Vendor, "KeyReply", Vec::<&str>::new())
            .company(CategoryId::Vendor, "Impostor", Vec::<&str>::new())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::VendorNotSingleton {
                company: "Impostor".to_string()
            }
        );
    }

    #[test]
    fn test_same_company_name_in_two_categories() {
        let dataset = small()
            .company(CategoryId::Solution, "Acme", ["Omni-channel"])
            .company(CategoryId::Cloud, "Acme", Vec::<&str>::new())
            .build()
            .unwrap();
        assert!(dataset.supports("solution", "Acme", "Omni-channel").unwrap());
        assert!(!dataset.supports("cloud", "Acme", "Omni-channel").unwrap());
    }

    #[test]
    fn test_unknown_supported_feature_rejected() {
        let err = small()
            .company(CategoryId::Cloud, "AWS", ["Teleportation"])
            .build()
            .unwrap_err();
        assert_eq!(err, Error::feature_not_found("Teleportation"));
    }

    #[test]
    fn test_every_company_covers_every_feature() {
        let dataset = small()
            .company(CategoryId::Cloud, "AWS", ["Multi-model"])
            .company_row(CategoryId::Platform, "Meta", [true, false, false])
            .build()
            .unwrap();
        for id in CategoryId::ALL {
            for company in dataset.companies(id) {
                assert_eq!(company.support.len(), dataset.feature_count());
            }
        }
    }

    #[test]
    fn test_vendor_always_supports_regardless_of_row() {
        let dataset = small()
            .company_row(CategoryId::Vendor, "KeyReply", [false, false, false])
            .build()
            .unwrap();
        for feature in dataset.all_features() {
            assert!(
                dataset
                    .supports("keyreply", "KeyReply", &feature.name)
                    .unwrap()
            );
            assert!(
                dataset
                    .category_supports(CategoryId::Vendor, &feature.name)
                    .unwrap()
            );
        }
    }

    #[test]
    fn test_vendor_still_validates_arguments() {
        let dataset = small()
            .company(CategoryId::Vendor, "KeyReply", Vec::<&str>::new())
            .build()
            .unwrap();
        assert!(dataset.supports("keyreply", "Someone", "Multi-model").is_err());
        assert!(dataset.supports("keyreply", "KeyReply", "Nope").is_err());
    }

    #[test]
    fn test_matrix_driven_vendor_uses_row() {
        let dataset = small()
            .company_row(CategoryId::Vendor, "KeyReply", [true, false, true])
            .vendor_policy(VendorPolicy::MatrixDriven)
            .build()
            .unwrap();
        assert!(dataset.supports("keyreply", "KeyReply", "Omni-channel").unwrap());
        assert!(!dataset.supports("keyreply", "KeyReply", "Multi-model").unwrap());
    }

    #[test]
    fn test_any_supports_ignores_vendor() {
        let dataset = small()
            .company(CategoryId::Platform, "OpenAI", ["Multi-model"])
            .company(CategoryId::Solution, "Haptik", ["Omni-channel"])
            .company_row(CategoryId::Vendor, "KeyReply", [true, true, true])
            .vendor_policy(VendorPolicy::MatrixDriven)
            .build()
            .unwrap();
        assert!(dataset.any_supports("Multi-model").unwrap());
        assert!(dataset.any_supports("Omni-channel").unwrap());
        assert!(!dataset.any_supports("Compliance & Security").unwrap());
        assert_eq!(
            dataset.any_supports("Nope"),
            Err(Error::feature_not_found("Nope"))
        );
    }

    #[test]
    fn test_category_supports_is_per_category() {
        let dataset = small()
            .company(CategoryId::Solution, "Haptik", ["Omni-channel"])
            .company(CategoryId::Solution, "KoreAI", Vec::<&str>::new())
            .build()
            .unwrap();
        assert!(
            dataset
                .category_supports(CategoryId::Solution, "Omni-channel")
                .unwrap()
        );
        assert!(
            !dataset
                .category_supports(CategoryId::Cloud, "Omni-channel")
                .unwrap()
        );
    }

    #[test]
    fn test_companies_keep_declaration_order() {
        let dataset = small()
            .company(CategoryId::Cloud, "Azure", Vec::<&str>::new())
            .company(CategoryId::Cloud, "AWS", Vec::<&str>::new())
            .company(CategoryId::Cloud, "Google Cloud", Vec::<&str>::new())
            .build()
            .unwrap();
        let names: Vec<&str> = dataset
            .companies(CategoryId::Cloud)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Azure", "AWS", "Google Cloud"]);
    }

    #[test]
    fn test_category_display_override() {
        let dataset = small()
            .category(CategoryInfo::new(CategoryId::Cloud, "Hyperscalers", ["GCP"]))
            .build()
            .unwrap();
        assert_eq!(dataset.category_info(CategoryId::Cloud).name, "Hyperscalers");
        let names: Vec<&str> = dataset.categories().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Platform Companies", "Hyperscalers", "Solution Providers", "KeyReply"]
        );
    }

    #[test]
    fn test_dataset_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ComparisonDataset>();
    }
}
