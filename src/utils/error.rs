use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    #[error("Template syntax error: {0}")]
    TemplateSyntaxError(#[from] handlebars::TemplateError),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("malformed input: line {line} has {found} fields, header has {expected}")]
    MalformedInput {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid value {value:?} for field {field}: {reason}")]
    InvalidFieldValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("no template registered for format {format:?}")]
    MissingTemplate { format: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
