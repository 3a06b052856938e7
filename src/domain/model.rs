use crate::utils::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One data row: field name mapped to the raw string value from the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub values: HashMap<String, String>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}

/// Parsed input: the ordered header fields plus one record per data row.
/// Field order fixes column order in the rendered output.
#[derive(Debug, Clone)]
pub struct TableData {
    pub fields: Vec<String>,
    pub records: Vec<Record>,
}

/// A single rendered table cell. Document-markup transforms put all styling
/// into `text`; web-markup transforms carry a CSS class alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    pub class: Option<String>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn classed(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some(class.into()),
        }
    }
}

/// Target document kind. Selects both the template and the transform table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Md,
    Html,
}

impl OutputFormat {
    /// The literal token used as template key, file extension and CLI value.
    pub fn token(self) -> &'static str {
        match self {
            OutputFormat::Md => "md",
            OutputFormat::Html => "html",
        }
    }

    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "md" => Ok(OutputFormat::Md),
            "html" => Ok(OutputFormat::Html),
            other => Err(ReportError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "expected one of: md, html".to_string(),
            }),
        }
    }
}

/// Output of the transform stage: the complete document text.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub format: OutputFormat,
    pub document: String,
    pub row_count: usize,
}
