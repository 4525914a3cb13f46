//! Integration tests for the build-time integrity pass.

use featmatrix_core::{CategoryId, Error, VendorPolicy};

use crate::common::tiny_taxonomy;

#[test]
fn test_short_legacy_row_is_rejected_at_build() {
    let err = tiny_taxonomy()
        .company_row(CategoryId::Platform, "OpenAI", [true])
        .build()
        .unwrap_err();
    assert!(err.is_integrity());
    assert_eq!(
        err.to_string(),
        "Support row for 'OpenAI' in category 'platform' has 1 entries, expected 2"
    );
}

#[test]
fn test_long_legacy_row_is_rejected_at_build() {
    let err = tiny_taxonomy()
        .company_row(CategoryId::Platform, "OpenAI", [true, false, true])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::RowLengthMismatch {
            expected: 2,
            actual: 3,
            ..
        }
    ));
}

#[test]
fn test_explicit_map_defaults_to_unsupported() {
    let dataset = tiny_taxonomy()
        .company(CategoryId::Cloud, "Azure", ["Beta"])
        .build()
        .unwrap();
    assert!(!dataset.supports("cloud", "Azure", "Alpha").unwrap());
    assert!(dataset.supports("cloud", "Azure", "Beta").unwrap());
}

#[test]
fn test_policy_drives_vendor_not_data() {
    let always = tiny_taxonomy()
        .company(CategoryId::Vendor, "KeyReply", Vec::<&str>::new())
        .build()
        .unwrap();
    let driven = tiny_taxonomy()
        .company(CategoryId::Vendor, "KeyReply", Vec::<&str>::new())
        .vendor_policy(VendorPolicy::MatrixDriven)
        .build()
        .unwrap();

    assert!(always.supports("keyreply", "KeyReply", "Alpha").unwrap());
    assert!(!driven.supports("keyreply", "KeyReply", "Alpha").unwrap());
}

#[test]
fn test_empty_competitors_support_nothing() {
    let dataset = tiny_taxonomy().build().unwrap();
    assert!(!dataset.any_supports("Alpha").unwrap());
    assert!(
        dataset
            .supports("solution", "Haptik", "Alpha")
            .is_err_and(|e| matches!(e, Error::UnknownCompany { .. }))
    );
}

#[test]
fn test_second_vendor_company_is_rejected_at_build() {
    let err = tiny_taxonomy()
        .company(CategoryId::Vendor, "KeyReply", Vec::<&str>::new())
        .company(CategoryId::Vendor, "Impostor", Vec::<&str>::new())
        .build()
        .unwrap_err();
    assert!(err.is_integrity());
    assert_eq!(
        err,
        Error::VendorNotSingleton {
            company: "Impostor".to_string()
        }
    );
}

#[test]
fn test_vendor_may_be_absent() {
    let dataset = tiny_taxonomy().build().unwrap();
    assert!(dataset.companies(CategoryId::Vendor).is_empty());
}
