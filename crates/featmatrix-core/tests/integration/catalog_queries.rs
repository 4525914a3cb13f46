//! Integration tests for queries against the built-in catalog.

use featmatrix_core::{CategoryId, Error, views};

use crate::common::{TestHarness, competitor_companies};

#[test]
fn test_platform_supports_multi_model() {
    let harness = TestHarness::new();
    assert!(
        harness
            .dataset
            .supports("platform", "OpenAI", "Multi-model")
            .unwrap()
    );
}

#[test]
fn test_any_supports_omni_channel_from_solutions() {
    let harness = TestHarness::new();
    let dataset = &harness.dataset;

    for (id, company) in competitor_companies(dataset) {
        let expected = id == CategoryId::Solution;
        assert_eq!(
            dataset.supports_in(id, &company, "Omni-channel").unwrap(),
            expected,
            "{id}/{company}"
        );
    }
    assert!(dataset.any_supports("Omni-channel").unwrap());
}

#[test]
fn test_cloud_lacks_healthcare_expertise() {
    let harness = TestHarness::new();
    assert!(
        !harness
            .dataset
            .supports("cloud", "AWS", "Healthcare Expertise")
            .unwrap()
    );
}

#[test]
fn test_nonexistent_feature_fails() {
    let harness = TestHarness::new();
    let err = harness
        .dataset
        .supports("platform", "OpenAI", "Nonexistent Feature")
        .unwrap_err();
    assert!(matches!(err, Error::FeatureNotFound { .. }));
}

#[test]
fn test_unknown_category_fails() {
    let harness = TestHarness::new();
    let err = harness
        .dataset
        .supports("unknown", "X", "Omni-channel")
        .unwrap_err();
    assert!(matches!(err, Error::UnknownCategory { .. }));
}

#[test]
fn test_vendor_row_always_true() {
    let harness = TestHarness::new();
    let dataset = &harness.dataset;
    for feature in dataset.all_features() {
        assert!(dataset.supports("keyreply", "KeyReply", &feature.name).unwrap());
    }
}

#[test]
fn test_aggregate_equals_or_over_competitors() {
    let harness = TestHarness::new();
    let dataset = &harness.dataset;
    let companies = competitor_companies(dataset);

    for feature in dataset.all_features() {
        let expected = companies
            .iter()
            .any(|(id, company)| dataset.supports_in(*id, company, &feature.name).unwrap());
        assert_eq!(dataset.any_supports(&feature.name).unwrap(), expected);
    }
}

#[test]
fn test_list_features_groups() {
    let harness = TestHarness::new();
    let listed = harness.dataset.list_features();
    assert_eq!(listed.len(), 19);
    assert_eq!(listed[0].0, "Core Capabilities");
    assert_eq!(listed[0].1.name, "Omni-channel");
    assert_eq!(listed[18].0, "Security and Compliance");
    assert_eq!(listed[18].1.name, "Compliance & Security");
}

#[test]
fn test_category_enumeration() {
    let harness = TestHarness::new();
    let keys: Vec<&str> = harness.dataset.categories().map(|c| c.id.key()).collect();
    assert_eq!(keys, vec!["platform", "cloud", "solution", "keyreply"]);
}

#[test]
fn test_summary_matches_category_views() {
    let harness = TestHarness::new();
    let dataset = &harness.dataset;
    let summary = views::summary(dataset).unwrap();

    for id in CategoryId::COMPETITORS {
        let per_company = views::category(dataset, id).unwrap();
        for (summary_row, row) in summary.rows().zip(per_company.rows()) {
            assert_eq!(summary_row.feature, row.feature);
            assert_eq!(summary_row.get(id), row.cells.iter().any(|c| c.supported));
        }
    }
}
