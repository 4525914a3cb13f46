//! Which comparison table is selected.

use clap::ValueEnum;
use clap::builder::PossibleValue;
use featmatrix_core::{CategoryId, CategoryView, ComparisonDataset, SummaryView, TableView, views};
use serde::Serialize;
use std::fmt;

/// Selected table: the summary, or one category's companies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// One column per category, vendor last.
    #[default]
    Summary,
    /// One column per company in a category.
    Category(CategoryId),
}

impl View {
    /// Every selectable view in tab order.
    pub const ALL: [View; 5] = [
        View::Summary,
        View::Category(CategoryId::Platform),
        View::Category(CategoryId::Cloud),
        View::Category(CategoryId::Solution),
        View::Category(CategoryId::Vendor),
    ];

    /// Key used on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            View::Summary => "summary",
            View::Category(id) => id.key(),
        }
    }

    /// Resolves the view against a dataset.
    pub fn resolve(&self, dataset: &ComparisonDataset) -> featmatrix_core::Result<Resolved> {
        match self {
            View::Summary => views::summary(dataset).map(Resolved::Summary),
            View::Category(id) => views::category(dataset, *id).map(Resolved::Category),
        }
    }
}

impl ValueEnum for View {
    fn value_variants<'a>() -> &'a [Self] {
        &View::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.key()))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A view with its support flags filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resolved {
    /// Summary rows with one named flag per category.
    Summary(SummaryView),
    /// Rows with one company-keyed cell per company.
    Category(CategoryView),
}

impl Resolved {
    /// Flattens into the grid drawn by the text renderer.
    pub fn table(&self) -> TableView {
        match self {
            Resolved::Summary(view) => view.table(),
            Resolved::Category(view) => view.table(),
        }
    }
}
