use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::fs;

/// Optional config file. Example:
///
/// ```toml
/// [report]
/// template_dir = "templates"
/// output_dir = "reports"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSection {
    /// Directory holding report_table.<format>.hbs overrides.
    pub template_dir: Option<String>,
    /// Directory for default-named output files.
    pub output_dir: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        tracing::debug!("Loading config file: {}", path);
        let content = fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.report.template_dir {
            validate_non_empty_string("template_dir", dir)?;
        }
        if let Some(dir) = &self.report.output_dir {
            validate_non_empty_string("output_dir", dir)?;
        }
        Ok(())
    }
}
