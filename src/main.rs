use anyhow::Context;
use clap::Parser;
use test_report::utils::logger;
use test_report::{CliConfig, LocalStorage, ReportEngine, ReportPipeline};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting test-report");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = cli.resolve().context("invalid configuration")?;

    let storage = LocalStorage::new(".".to_string());
    let pipeline = ReportPipeline::new(storage, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("✅ Report written to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Report generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
