#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

use crate::core::{ConfigProvider, NumericPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_choices, validate_file_extension, validate_non_empty, validate_path, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CANDIDATES_PATH: &str = "csv/employees.csv";
pub const DEFAULT_JOBS_PATH: &str = "csv/jobs.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const OUTPUT_FORMATS: [&str; 3] = ["text", "csv", "json"];

/// Effective settings for one run after the TOML file and CLI flags are merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub candidates_path: String,
    pub jobs_path: String,
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub show_skills: bool,
    pub strict_numbers: bool,
    pub monitor: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            candidates_path: DEFAULT_CANDIDATES_PATH.to_string(),
            jobs_path: DEFAULT_JOBS_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            output_formats: vec!["text".to_string()],
            show_skills: false,
            strict_numbers: false,
            monitor: false,
        }
    }
}

impl ConfigProvider for RunConfig {
    fn candidates_path(&self) -> &str {
        &self.candidates_path
    }

    fn jobs_path(&self) -> &str {
        &self.jobs_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn show_skills(&self) -> bool {
        self.show_skills
    }

    fn numeric_policy(&self) -> NumericPolicy {
        if self.strict_numbers {
            NumericPolicy::Strict
        } else {
            NumericPolicy::Lenient
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.candidates", &self.candidates_path)?;
        validate_file_extension("input.candidates", &self.candidates_path, &["csv"])?;
        validate_path("input.jobs", &self.jobs_path)?;
        validate_file_extension("input.jobs", &self.jobs_path, &["csv"])?;
        validate_path("output.path", &self.output_path)?;
        validate_non_empty("output.formats", &self.output_formats)?;
        validate_choices("output.formats", &self.output_formats, &OUTPUT_FORMATS)?;
        Ok(())
    }
}
