//! Report renderer: selects the template and transform table for the
//! requested format and produces the final document text.
//!
//! Templates are handlebars resources registered under the format token.
//! The built-in ones are embedded at compile time; a template directory can
//! override them with `report_table.<token>.hbs` files.

use crate::core::transforms::transform_for;
use crate::domain::model::{Cell, OutputFormat, TableData};
use crate::utils::error::{ReportError, Result};
use chrono::Local;
use handlebars::Handlebars;
use serde_json::json;
use std::path::Path;

const MD_TEMPLATE: &str = include_str!("../templates/report_table.md.hbs");
const HTML_TEMPLATE: &str = include_str!("../templates/report_table.html.hbs");

pub struct Renderer<'a> {
    registry: Handlebars<'a>,
}

impl Renderer<'_> {
    /// Build a renderer with the embedded templates.
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.register_template_string(OutputFormat::Md.token(), MD_TEMPLATE)?;
        registry.register_template_string(OutputFormat::Html.token(), HTML_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Build a renderer whose templates are overridden by
    /// `report_table.<token>.hbs` files found in `dir`. Formats without an
    /// override file keep the embedded template.
    pub fn with_template_dir(dir: &Path) -> Result<Self> {
        let mut renderer = Self::new()?;
        for format in [OutputFormat::Md, OutputFormat::Html] {
            let token = format.token();
            let path = dir.join(format!("report_table.{}.hbs", token));
            if path.is_file() {
                tracing::debug!("Using template override: {}", path.display());
                renderer.registry.register_template_file(token, &path)?;
            }
        }
        Ok(renderer)
    }

    /// Render one complete document. Every record becomes exactly one row;
    /// cells follow header field order, transformed by the format's column
    /// table with identity fallback.
    pub fn render(&self, format: OutputFormat, table: &TableData) -> Result<String> {
        let token = format.token();
        if !self.registry.has_template(token) {
            return Err(ReportError::MissingTemplate {
                format: token.to_string(),
            });
        }

        let rows = table
            .records
            .iter()
            .map(|record| {
                table
                    .fields
                    .iter()
                    .map(|field| {
                        // Missing keys cannot happen for rows built by the
                        // reader; the fallback keeps the renderer total.
                        let raw = record.get(field).unwrap_or("");
                        match transform_for(format, field) {
                            Some(transform) => transform(raw),
                            None => Ok(Cell::plain(raw)),
                        }
                    })
                    .collect::<Result<Vec<Cell>>>()
            })
            .collect::<Result<Vec<Vec<Cell>>>>()?;

        let context = json!({
            "fields": table.fields,
            "rows": rows,
            "meta": {
                "tool": env!("CARGO_PKG_NAME"),
                "version": env!("CARGO_PKG_VERSION"),
                "row_count": rows.len(),
                "generated": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            },
        });

        Ok(self.registry.render(token, &context)?)
    }
}
