pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig, ReportConfig};
pub use crate::core::{engine::ReportEngine, pipeline::ReportPipeline, render::Renderer};
pub use crate::domain::model::OutputFormat;
pub use crate::utils::error::{ReportError, Result};
