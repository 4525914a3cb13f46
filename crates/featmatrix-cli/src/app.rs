//! Command execution against the comparison dataset.

use crate::cli::Command;
use crate::config::{CliConfig, OutputFormat};
use crate::config_handlers::handle_config_command;
use crate::error::Result;
use crate::render;
use crate::view::View;
use featmatrix_core::{CategoryId, ComparisonDataset, catalog};
use serde_json::json;
use std::io::Write;

/// Loaded dataset plus the effective output settings.
#[derive(Debug, Clone)]
pub struct App {
    dataset: ComparisonDataset,
    config: CliConfig,
    config_path: Option<String>,
}

impl App {
    /// Builds the catalog and applies the format override on top of
    /// the loaded configuration.
    pub fn new(
        config: CliConfig,
        config_path: Option<String>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        let mut config = config;
        if let Some(format) = format {
            config.output.format = format;
        }
        Ok(Self {
            dataset: catalog::keyreply()?,
            config,
            config_path,
        })
    }

    /// Runs one command, writing its output to `out`.
    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<()> {
        log::debug!("Running {command:?}");
        match command {
            Command::Summary => self.show(View::Summary, out),
            Command::Show { view } => self.show(*view, out),
            Command::Features => self.features(out),
            Command::Categories => self.categories(out),
            Command::Supports {
                category,
                company,
                feature,
            } => self.supports(category, company, feature, out),
            Command::Any { feature } => self.any(feature, out),
            Command::Validate => self.validate(out),
            Command::Config { action } => {
                handle_config_command(self.config_path.as_deref(), action, out)
            }
        }
    }

    fn json(&self) -> bool {
        self.config.output.format == OutputFormat::Json
    }

    fn emit_json<W: Write, T: serde::Serialize>(&self, value: &T, out: &mut W) -> Result<()> {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    fn show<W: Write>(&self, view: View, out: &mut W) -> Result<()> {
        let resolved = view.resolve(&self.dataset)?;
        if self.json() {
            return self.emit_json(&resolved, out);
        }
        write!(out, "{}", render::table(&resolved.table(), &self.config.output))?;
        Ok(())
    }

    fn features<W: Write>(&self, out: &mut W) -> Result<()> {
        let listed = self.dataset.list_features();
        if self.json() {
            let entries: Vec<_> = listed
                .iter()
                .map(|(group, feature)| json!({ "group": group, "feature": feature }))
                .collect();
            return self.emit_json(&entries, out);
        }
        write!(out, "{}", render::features(&listed, &self.config.output))?;
        Ok(())
    }

    fn categories<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.json() {
            let infos: Vec<_> = self.dataset.categories().collect();
            return self.emit_json(&infos, out);
        }
        write!(out, "{}", render::categories(self.dataset.categories()))?;
        Ok(())
    }

    fn supports<W: Write>(
        &self,
        category: &str,
        company: &str,
        feature: &str,
        out: &mut W,
    ) -> Result<()> {
        let id = self.dataset.category(category)?;
        self.dataset.company(id, company)?;
        let feature = self.dataset.resolve_feature(feature)?;
        let supported = self.dataset.supports_in(id, company, &feature.name)?;

        if self.json() {
            return self.emit_json(
                &json!({
                    "category": id,
                    "company": company,
                    "feature": feature.name,
                    "supported": supported,
                }),
                out,
            );
        }
        writeln!(
            out,
            "{company} ({id}) {} {}",
            if supported { "supports" } else { "does not support" },
            feature.name
        )?;
        Ok(())
    }

    fn any<W: Write>(&self, feature: &str, out: &mut W) -> Result<()> {
        let feature = self.dataset.resolve_feature(feature)?;
        let supported = self.dataset.any_supports(&feature.name)?;
        let by_category = CategoryId::COMPETITORS
            .iter()
            .map(|id| -> featmatrix_core::Result<(CategoryId, bool)> {
                Ok((*id, self.dataset.category_supports(*id, &feature.name)?))
            })
            .collect::<featmatrix_core::Result<Vec<_>>>()?;

        if self.json() {
            let categories: serde_json::Map<String, serde_json::Value> = by_category
                .iter()
                .map(|(id, s)| (id.key().to_string(), json!(s)))
                .collect();
            return self.emit_json(
                &json!({
                    "feature": feature.name,
                    "supported": supported,
                    "categories": categories,
                }),
                out,
            );
        }

        let matching: Vec<&str> = by_category
            .iter()
            .filter(|(_, s)| *s)
            .map(|(id, _)| self.dataset.category_info(*id).name.as_str())
            .collect();
        if matching.is_empty() {
            writeln!(out, "No competitor supports {}", feature.name)?;
        } else {
            writeln!(
                out,
                "{} is supported by: {}",
                feature.name,
                matching.join(", ")
            )?;
        }
        Ok(())
    }

    fn validate<W: Write>(&self, out: &mut W) -> Result<()> {
        let features = self.dataset.feature_count();
        let groups = self.dataset.feature_categories().len();
        let companies: usize = CategoryId::ALL
            .iter()
            .map(|id| self.dataset.companies(*id).len())
            .sum();

        if self.json() {
            return self.emit_json(
                &json!({
                    "valid": true,
                    "features": features,
                    "feature_categories": groups,
                    "companies": companies,
                    "vendor_policy": self.dataset.vendor_policy(),
                }),
                out,
            );
        }
        writeln!(
            out,
            "ok: {features} features in {groups} groups, {companies} companies"
        )?;
        Ok(())
    }
}
