//! Plain-text rendering of comparison tables and listings.

use crate::config::OutputConfig;
use featmatrix_core::{CategoryInfo, Feature, TableView};
use std::fmt::Write;

const FEATURE_HEADING: &str = "Feature";

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad_right(s: &str, to: usize) -> String {
    format!("{s}{}", " ".repeat(to.saturating_sub(width(s))))
}

fn center(s: &str, to: usize) -> String {
    let total = to.saturating_sub(width(s));
    let left = total / 2;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(total - left))
}

/// Renders a table view, one block per feature group.
///
/// ```text
/// Core Capabilities
/// Feature      | Azure | AWS
/// -------------+-------+-----
/// Omni-channel |   ✗   |  ✗
/// ```
pub fn table(view: &TableView, style: &OutputConfig) -> String {
    let symbol_width = width(&style.check).max(width(&style.cross));
    let feature_width = view
        .rows()
        .map(|row| width(&row.feature.name))
        .chain(std::iter::once(width(FEATURE_HEADING)))
        .max()
        .unwrap_or(0);
    let column_widths: Vec<usize> = view
        .columns
        .iter()
        .map(|c| width(c).max(symbol_width))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);

    for group in &view.groups {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", group.name);

        let mut header = pad_right(FEATURE_HEADING, feature_width);
        let mut rule = "-".repeat(feature_width);
        for (column, w) in view.columns.iter().zip(&column_widths) {
            header.push_str(" | ");
            header.push_str(&center(column, *w));
            rule.push_str("-+-");
            rule.push_str(&"-".repeat(*w));
        }
        let _ = writeln!(out, "{}", header.trim_end());
        let _ = writeln!(out, "{rule}");

        for row in &group.rows {
            let mut line = pad_right(&row.feature.name, feature_width);
            for (column, w) in view.columns.iter().zip(&column_widths) {
                let symbol = match row.cell(column) {
                    Some(true) => style.check.as_str(),
                    Some(false) => style.cross.as_str(),
                    None => "",
                };
                line.push_str(" | ");
                line.push_str(&center(symbol, *w));
            }
            let _ = writeln!(out, "{}", line.trim_end());
            if style.descriptions {
                let _ = writeln!(out, "  {}", row.feature.description);
            }
        }
    }

    out
}

/// Renders the feature taxonomy grouped by feature category.
pub fn features(listed: &[(&str, &Feature)], style: &OutputConfig) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;

    for (group, feature) in listed {
        if current != Some(*group) {
            if current.is_some() {
                let _ = writeln!(out);
            }
            let _ = writeln!(out, "{group}");
            current = Some(*group);
        }
        if style.descriptions {
            let _ = writeln!(
                out,
                "  {} ({}): {}",
                feature.name, feature.id, feature.description
            );
        } else {
            let _ = writeln!(out, "  {} ({})", feature.name, feature.id);
        }
    }

    out
}

/// Renders the category enumeration.
pub fn categories<'a, I>(infos: I) -> String
where
    I: IntoIterator<Item = &'a CategoryInfo>,
{
    let mut out = String::new();
    for info in infos {
        let _ = writeln!(
            out,
            "{:<9} {} (e.g. {})",
            info.id.key(),
            info.name,
            info.examples.join(", ")
        );
    }
    out
}
