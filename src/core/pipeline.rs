use crate::core::reader::read_table;
use crate::core::render::Renderer;
use crate::domain::model::{RenderedReport, TableData};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    fn extract(&self) -> Result<TableData> {
        tracing::debug!("Reading input from: {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path())?;
        let text = String::from_utf8_lossy(&bytes);

        let table = read_table(&text)?;
        tracing::debug!(
            "Parsed {} fields and {} records",
            table.fields.len(),
            table.records.len()
        );
        Ok(table)
    }

    fn transform(&self, data: TableData) -> Result<RenderedReport> {
        let format = self.config.format();
        let renderer = match self.config.template_dir() {
            Some(dir) => Renderer::with_template_dir(dir)?,
            None => Renderer::new()?,
        };

        let row_count = data.records.len();
        let document = renderer.render(format, &data)?;

        Ok(RenderedReport {
            format,
            document,
            row_count,
        })
    }

    fn load(&self, report: RenderedReport) -> Result<String> {
        let output_path = self.config.output_path().to_string();
        tracing::debug!(
            "Writing {} report ({} bytes) to {}",
            report.format.token(),
            report.document.len(),
            output_path
        );
        self.storage
            .write_file(&output_path, report.document.as_bytes())?;
        Ok(output_path)
    }
}
