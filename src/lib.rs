pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{storage::LocalStorage, RunConfig};

pub use crate::core::{
    engine::MatchEngine,
    pipeline::MatchingPipeline,
    ranking::{build_outcome, build_rankings},
    score::{score, score_breakdown, ScoreBreakdown},
};
pub use crate::domain::model::{Candidate, CandidateIndex, Job, Match, MatchOutcome, Preference, Rankings};
pub use crate::utils::error::{MatchError, Result};
