pub mod cli;
pub mod toml_config;

use crate::domain::model::OutputFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};
use self::toml_config::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "test-report")]
#[command(about = "Render a CSV of test results as a markdown or HTML report")]
pub struct CliConfig {
    /// Path to the csv file
    #[arg(short = 'i', long)]
    pub input_file: Option<String>,

    /// Output type
    #[arg(short = 't', long = "type", value_enum)]
    pub format: OutputFormat,

    /// Path to the output file (default: input path with the format token
    /// as extension)
    #[arg(short = 'o', long)]
    pub output_file: Option<String>,

    /// Optional TOML config file with template overrides and output dir
    #[arg(long)]
    pub config: Option<String>,

    /// Input path, positional form
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = self.input_file.as_deref().or(self.input.as_deref());
        match input {
            Some(path) => validate_path("input_file", path)?,
            None => {
                return Err(ReportError::MissingConfigError {
                    field: "input_file".to_string(),
                })
            }
        }

        if let Some(output) = &self.output_file {
            validate_path("output_file", output)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}

impl CliConfig {
    /// Resolve CLI arguments (and the optional TOML config file) into a
    /// ready-to-run configuration.
    pub fn resolve(&self) -> Result<ReportConfig> {
        self.validate()?;

        let resolved_input = self.input_file.clone().or_else(|| self.input.clone());
        let input_path = validate_required_field("input_file", &resolved_input)?.clone();

        let file_config = match self.config.as_deref() {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let output_path = match &self.output_file {
            Some(path) => path.clone(),
            None => default_output_path(
                &input_path,
                self.format,
                file_config
                    .as_ref()
                    .and_then(|c| c.report.output_dir.as_deref()),
            ),
        };

        let template_dir = file_config
            .as_ref()
            .and_then(|c| c.report.template_dir.as_deref())
            .map(PathBuf::from);

        Ok(ReportConfig {
            input_path,
            format: self.format,
            output_path,
            template_dir,
        })
    }
}

/// Input path with its extension replaced by the format token, placed in
/// `output_dir` when one is configured.
fn default_output_path(input: &str, format: OutputFormat, output_dir: Option<&str>) -> String {
    let derived = Path::new(input).with_extension(format.token());
    let path = match output_dir {
        Some(dir) => match derived.file_name() {
            Some(name) => Path::new(dir).join(name),
            None => derived,
        },
        None => derived,
    };
    path.to_string_lossy().into_owned()
}

/// Fully resolved invocation settings, handed to the pipeline.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input_path: String,
    pub format: OutputFormat,
    pub output_path: String,
    pub template_dir: Option<PathBuf>,
}

impl ConfigProvider for ReportConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn format(&self) -> OutputFormat {
        self.format
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn template_dir(&self) -> Option<&Path> {
        self.template_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(input_file: Option<&str>, input: Option<&str>, format: OutputFormat) -> CliConfig {
        CliConfig {
            input_file: input_file.map(str::to_string),
            format,
            output_file: None,
            config: None,
            input: input.map(str::to_string),
            verbose: false,
        }
    }

    #[test]
    fn test_default_output_path_swaps_extension() {
        let config = cli(Some("run/results.csv"), None, OutputFormat::Html)
            .resolve()
            .unwrap();
        assert_eq!(config.output_path, "run/results.html");

        let config = cli(Some("results.csv"), None, OutputFormat::Md)
            .resolve()
            .unwrap();
        assert_eq!(config.output_path, "results.md");
    }

    #[test]
    fn test_positional_input_accepted() {
        let config = cli(None, Some("results.csv"), OutputFormat::Md)
            .resolve()
            .unwrap();
        assert_eq!(config.input_path, "results.csv");
    }

    #[test]
    fn test_named_input_wins_over_positional() {
        let config = cli(Some("named.csv"), Some("positional.csv"), OutputFormat::Md)
            .resolve()
            .unwrap();
        assert_eq!(config.input_path, "named.csv");
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let err = cli(None, None, OutputFormat::Md).resolve().unwrap_err();
        assert!(matches!(err, ReportError::MissingConfigError { .. }));
    }

    #[test]
    fn test_explicit_output_file_is_kept() {
        let mut config = cli(Some("results.csv"), None, OutputFormat::Html);
        config.output_file = Some("custom/report.html".to_string());
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.output_path, "custom/report.html");
    }

    #[test]
    fn test_output_dir_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("report.toml");
        std::fs::write(&config_path, "[report]\noutput_dir = \"reports\"\n").unwrap();

        let mut config = cli(Some("run/results.csv"), None, OutputFormat::Md);
        config.config = Some(config_path.to_string_lossy().into_owned());
        let resolved = config.resolve().unwrap();

        assert_eq!(resolved.output_path, "reports/results.md");
    }
}
