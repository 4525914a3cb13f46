//! View models for rendering layers.
//!
//! Views are plain data: they resolve every support flag up front so a
//! renderer only has to lay out rows and columns. [`SummaryView`] and
//! [`CategoryView`] name every flag by its column; both flatten into a
//! [`TableView`] for renderers that draw generic grids.

use crate::dataset::ComparisonDataset;
use crate::error::Result;
use crate::types::{CategoryId, Feature};
use serde::Serialize;

// ============================================================================
// Summary
// ============================================================================

/// One summary row: a feature and its answer per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Feature shown in the first column.
    pub feature: Feature,
    /// Any platform company supports the feature.
    pub platform: bool,
    /// Any cloud provider supports the feature.
    pub cloud: bool,
    /// Any solution provider supports the feature.
    pub solution: bool,
    /// The vendor's answer under the dataset's vendor policy.
    pub vendor: bool,
}

impl SummaryRow {
    /// The flag shown under a category's column.
    pub fn get(&self, id: CategoryId) -> bool {
        match id {
            CategoryId::Platform => self.platform,
            CategoryId::Cloud => self.cloud,
            CategoryId::Solution => self.solution,
            CategoryId::Vendor => self.vendor,
        }
    }
}

/// Summary rows belonging to one feature category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryGroup {
    /// Feature category name.
    pub name: String,
    /// Rows in display order.
    pub rows: Vec<SummaryRow>,
}

/// Competitor categories against the vendor, one row per feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    /// Title of the table.
    pub title: String,
    /// Column headings: competitor category names, then the vendor.
    pub columns: Vec<String>,
    /// Groups of rows.
    pub groups: Vec<SummaryGroup>,
}

impl SummaryView {
    /// Iterates over every row in every group.
    pub fn rows(&self) -> impl Iterator<Item = &SummaryRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    /// Flattens the summary into a generic table.
    pub fn table(&self) -> TableView {
        let headings: Vec<(CategoryId, &String)> =
            CategoryId::ALL.into_iter().zip(&self.columns).collect();
        TableView {
            title: self.title.clone(),
            columns: self.columns.clone(),
            groups: self
                .groups
                .iter()
                .map(|group| RowGroup {
                    name: group.name.clone(),
                    rows: group
                        .rows
                        .iter()
                        .map(|row| FeatureRow {
                            feature: row.feature.clone(),
                            cells: headings
                                .iter()
                                .map(|(id, column)| Cell::new(column.as_str(), row.get(*id)))
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Builds the summary view.
///
/// A competitor flag is `true` when any company in that category
/// supports the feature.
pub fn summary(dataset: &ComparisonDataset) -> Result<SummaryView> {
    let groups = dataset
        .feature_categories()
        .iter()
        .map(|group| -> Result<SummaryGroup> {
            let rows = group
                .features
                .iter()
                .map(|feature| -> Result<SummaryRow> {
                    let name = feature.name.as_str();
                    Ok(SummaryRow {
                        feature: feature.clone(),
                        platform: dataset.category_supports(CategoryId::Platform, name)?,
                        cloud: dataset.category_supports(CategoryId::Cloud, name)?,
                        solution: dataset.category_supports(CategoryId::Solution, name)?,
                        vendor: dataset.category_supports(CategoryId::Vendor, name)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(SummaryGroup {
                name: group.name.clone(),
                rows,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SummaryView {
        title: "Summary Comparison".to_string(),
        columns: CategoryId::ALL
            .iter()
            .map(|id| dataset.category_info(*id).name.clone())
            .collect(),
        groups,
    })
}

// ============================================================================
// Category
// ============================================================================

/// The companies of one category, one row per feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    /// Category shown.
    pub category: CategoryId,
    /// Title of the table.
    pub title: String,
    /// Company names in declaration order.
    pub companies: Vec<String>,
    /// Groups of rows; each cell is keyed by company name.
    pub groups: Vec<RowGroup>,
}

impl CategoryView {
    /// Iterates over every row in every group.
    pub fn rows(&self) -> impl Iterator<Item = &FeatureRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }

    /// Flattens the view into a generic table.
    pub fn table(&self) -> TableView {
        TableView {
            title: self.title.clone(),
            columns: self.companies.clone(),
            groups: self.groups.clone(),
        }
    }
}

/// Builds the view of a single category.
pub fn category(dataset: &ComparisonDataset, id: CategoryId) -> Result<CategoryView> {
    let companies = dataset.companies(id);
    let groups = dataset
        .feature_categories()
        .iter()
        .map(|group| -> Result<RowGroup> {
            let rows = group
                .features
                .iter()
                .map(|feature| -> Result<FeatureRow> {
                    let cells = companies
                        .iter()
                        .map(|c| -> Result<Cell> {
                            Ok(Cell::new(
                                c.name.as_str(),
                                dataset.supports_in(id, &c.name, &feature.name)?,
                            ))
                        })
                        .collect::<Result<Vec<_>>>()?;
                    Ok(FeatureRow {
                        feature: feature.clone(),
                        cells,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(RowGroup {
                name: group.name.clone(),
                rows,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CategoryView {
        category: id,
        title: format!("{} Comparison", dataset.category_info(id).name),
        companies: companies.iter().map(|c| c.name.clone()).collect(),
        groups,
    })
}

// ============================================================================
// Generic table
// ============================================================================

/// A support flag together with the column it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Column heading.
    pub column: String,
    /// Whether the feature is supported.
    pub supported: bool,
}

impl Cell {
    /// Creates a cell.
    pub fn new<S: Into<String>>(column: S, supported: bool) -> Self {
        Self {
            column: column.into(),
            supported,
        }
    }
}

/// One feature row: the feature plus one keyed cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    /// Feature shown in the first column.
    pub feature: Feature,
    /// Support flags, one per column.
    pub cells: Vec<Cell>,
}

impl FeatureRow {
    /// The flag under a column heading, if the row has that column.
    pub fn cell(&self, column: &str) -> Option<bool> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.supported)
    }
}

/// Rows belonging to one feature category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowGroup {
    /// Feature category name.
    pub name: String,
    /// Rows in display order.
    pub rows: Vec<FeatureRow>,
}

/// A table of feature groups against a set of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    /// Title of the table.
    pub title: String,
    /// Column headings after the feature column.
    pub columns: Vec<String>,
    /// Groups of rows.
    pub groups: Vec<RowGroup>,
}

impl TableView {
    /// Iterates over every row in every group.
    pub fn rows(&self) -> impl Iterator<Item = &FeatureRow> {
        self.groups.iter().flat_map(|g| g.rows.iter())
    }
}
