use crate::domain::model::{MatchInput, MatchOutcome, ReportBundle};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// How to treat numeric columns that do not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// Coerce to zero and keep going.
    #[default]
    Lenient,
    /// Reject the whole run.
    Strict,
}

pub trait ConfigProvider: Send + Sync {
    fn candidates_path(&self) -> &str;
    fn jobs_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn show_skills(&self) -> bool;
    fn numeric_policy(&self) -> NumericPolicy;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<MatchInput>;
    async fn transform(&self, input: &MatchInput) -> Result<MatchOutcome>;
    async fn load(&self, input: &MatchInput, outcome: MatchOutcome) -> Result<ReportBundle>;
}
