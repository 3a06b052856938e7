use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Run the three pipeline stages in order. Any stage failure aborts the
    /// whole run; a report is either written completely or not at all.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting report generation");

        let table = self.pipeline.extract()?;
        tracing::info!("Extracted {} records", table.records.len());

        let report = self.pipeline.transform(table)?;
        tracing::info!(
            "Rendered {} rows as {}",
            report.row_count,
            report.format.token()
        );

        let output_path = self.pipeline.load(report)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
