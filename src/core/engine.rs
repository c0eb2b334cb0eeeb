use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct RosterEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RosterEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting roster report...");

        // Extract
        let roster = self.pipeline.extract().await?;
        tracing::info!("Read {} entries from {}", roster.len(), roster.source);

        // Transform
        let report = self.pipeline.transform(roster).await?;
        tracing::info!(
            "{} well-formed, {} unique, {} domains",
            report.well_formed,
            report.unique_emails.len(),
            report.domain_counts.len()
        );

        // Load
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(output_path)
    }
}
