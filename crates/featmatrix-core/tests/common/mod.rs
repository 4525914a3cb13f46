//! Common fixtures for featmatrix-core integration tests.

use featmatrix_core::{CategoryId, ComparisonDataset, DatasetBuilder, catalog};

/// Test harness holding the built-in catalog.
pub struct TestHarness {
    /// The KeyReply comparison dataset
    pub dataset: ComparisonDataset,
}

impl TestHarness {
    /// Creates a harness around the built-in catalog.
    pub fn new() -> Self {
        Self {
            dataset: catalog::keyreply().expect("built-in catalog should validate"),
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A two-feature taxonomy with no companies.
pub fn tiny_taxonomy() -> DatasetBuilder {
    DatasetBuilder::new().feature_category(
        "Core",
        [("Alpha", "first feature"), ("Beta", "second feature")],
    )
}

/// Every `(category, company)` pair of the competitor categories.
pub fn competitor_companies(dataset: &ComparisonDataset) -> Vec<(CategoryId, String)> {
    CategoryId::COMPETITORS
        .iter()
        .flat_map(|id| {
            dataset
                .companies(*id)
                .iter()
                .map(move |c| (*id, c.name.clone()))
        })
        .collect()
}
