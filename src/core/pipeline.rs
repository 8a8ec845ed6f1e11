use crate::core::loader::{parse_candidates, parse_jobs};
use crate::core::ranking::build_outcome;
use crate::core::report::{attach_skills, render_csv, render_json, render_text};
use crate::core::{ConfigProvider, MatchInput, MatchOutcome, Pipeline, ReportBundle, Storage};
use crate::domain::model::CandidateIndex;
use crate::utils::error::Result;
use std::path::Path;

pub const CSV_REPORT_FILE: &str = "matches.csv";
pub const JSON_REPORT_FILE: &str = "matches.json";

/// Reads both sources, ranks, and renders the requested report formats.
pub struct MatchingPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MatchingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn wants(&self, format: &str) -> bool {
        self.config.output_formats().iter().any(|f| f == format)
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MatchingPipeline<S, C> {
    async fn extract(&self) -> Result<MatchInput> {
        let policy = self.config.numeric_policy();

        tracing::debug!("Reading candidates from: {}", self.config.candidates_path());
        let raw = self.storage.read_file(self.config.candidates_path()).await?;
        let (candidates, candidate_report) =
            parse_candidates(&raw, self.config.candidates_path(), policy)?;

        tracing::debug!("Reading jobs from: {}", self.config.jobs_path());
        let raw = self.storage.read_file(self.config.jobs_path()).await?;
        let (jobs, job_report) = parse_jobs(&raw, self.config.jobs_path(), policy)?;

        let coerced = candidate_report.coerced_fields + job_report.coerced_fields;
        if coerced > 0 {
            tracing::warn!("{} numeric fields could not be parsed and were read as 0", coerced);
        }

        Ok(MatchInput { candidates, jobs })
    }

    async fn transform(&self, input: &MatchInput) -> Result<MatchOutcome> {
        build_outcome(&input.candidates, &input.jobs)
    }

    async fn load(&self, input: &MatchInput, outcome: MatchOutcome) -> Result<ReportBundle> {
        let mut rankings = outcome.job_rankings;
        let index = CandidateIndex::new(&input.candidates);
        attach_skills(&mut rankings, &index);

        let mut bundle = ReportBundle {
            text: render_text(&rankings, self.config.show_skills()),
            job_count: rankings.len(),
            match_count: rankings.values().map(Vec::len).sum(),
            ..ReportBundle::default()
        };

        if self.wants("csv") {
            let csv = render_csv(&rankings)?;
            let path = self.output_file(CSV_REPORT_FILE);
            self.storage.write_file(&path, csv.as_bytes()).await?;
            tracing::debug!("CSV report written to {}", path);
            bundle.written_files.push(path);
            bundle.csv = Some(csv);
        }

        if self.wants("json") {
            let json = render_json(&rankings, input.candidates.len())?;
            let path = self.output_file(JSON_REPORT_FILE);
            self.storage.write_file(&path, json.as_bytes()).await?;
            tracing::debug!("JSON report written to {}", path);
            bundle.written_files.push(path);
            bundle.json = Some(json);
        }

        Ok(bundle)
    }
}
