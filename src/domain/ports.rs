use crate::domain::model::{OutputFormat, RenderedReport, TableData};
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn format(&self) -> OutputFormat;
    fn output_path(&self) -> &str;
    fn template_dir(&self) -> Option<&Path>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<TableData>;
    fn transform(&self, data: TableData) -> Result<RenderedReport>;
    fn load(&self, report: RenderedReport) -> Result<String>;
}
