use crate::core::{MatchInput, Pipeline, ReportBundle};
use crate::utils::error::Result;
use crate::utils::monitor::ResourceMonitor;

/// Drives a pipeline through extract, rank and report.
pub struct MatchEngine<P: Pipeline> {
    pipeline: P,
    monitor: ResourceMonitor,
}

impl<P: Pipeline> MatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: ResourceMonitor::new(monitor_enabled),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<ReportBundle> {
        tracing::info!("Starting matching run");
        self.monitor.log_phase("Start");

        let input = self.extract_phase().await?;

        tracing::info!("Ranking candidates...");
        let outcome = self.pipeline.transform(&input).await?;
        tracing::info!(
            "Ranked {} candidates for {} jobs",
            input.candidates.len(),
            outcome.job_rankings.len()
        );
        self.monitor.log_phase("Rank");

        tracing::info!("Rendering report...");
        let bundle = self.pipeline.load(&input, outcome).await?;
        for path in &bundle.written_files {
            tracing::info!("📁 Report saved to: {}", path);
        }
        self.monitor.log_phase("Report");
        self.monitor.log_summary();

        Ok(bundle)
    }

    /// Loads and validates both sources without ranking.
    pub async fn inspect(&self) -> Result<MatchInput> {
        let input = self.extract_phase().await?;
        self.monitor.log_summary();
        Ok(input)
    }

    async fn extract_phase(&self) -> Result<MatchInput> {
        tracing::info!("Loading candidates and jobs...");
        let input = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} candidates and {} jobs",
            input.candidates.len(),
            input.jobs.len()
        );
        self.monitor.log_phase("Load");
        Ok(input)
    }
}
