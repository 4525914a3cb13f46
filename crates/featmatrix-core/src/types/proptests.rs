//! Property-based tests for the comparison data model.
