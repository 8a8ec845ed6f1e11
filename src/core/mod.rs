pub mod engine;
pub mod loader;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod score;

pub use crate::domain::model::{MatchInput, MatchOutcome, ReportBundle};
pub use crate::domain::ports::{ConfigProvider, NumericPolicy, Pipeline, Storage};
pub use crate::utils::error::Result;
