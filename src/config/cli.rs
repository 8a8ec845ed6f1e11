use crate::config::toml_config::TomlConfig;
use crate::config::RunConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "job-matcher")]
#[command(about = "Rank candidates for job openings by compatibility score")]
pub struct CliConfig {
    /// Candidate CSV (id, skills, location, age, experience, expected salary)
    #[arg(long)]
    pub candidates: Option<String>,

    /// Job CSV (id, skills, location, required experience, budget, vacancies)
    #[arg(long)]
    pub jobs: Option<String>,

    /// Optional TOML run configuration; flags given here win over the file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory for csv/json reports
    #[arg(long)]
    pub output_path: Option<String>,

    /// Report formats: text, csv, json
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Print each candidate's skills next to the score
    #[arg(long)]
    pub show_skills: bool,

    /// Fail on unparseable numbers instead of reading them as 0
    #[arg(long)]
    pub strict_numbers: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    /// Load and validate the inputs without ranking
    #[arg(long)]
    pub dry_run: bool,
}

impl CliConfig {
    /// Loads the TOML file if one was given.
    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        self.config.as_deref().map(TomlConfig::from_file).transpose()
    }

    /// Merges defaults, the optional file, and the flags, in that order.
    pub fn resolve(&self, file: Option<&TomlConfig>) -> RunConfig {
        let mut run = RunConfig::default();
        if let Some(file) = file {
            file.apply_to(&mut run);
        }

        if let Some(candidates) = &self.candidates {
            run.candidates_path = candidates.clone();
        }
        if let Some(jobs) = &self.jobs {
            run.jobs_path = jobs.clone();
        }
        if let Some(output_path) = &self.output_path {
            run.output_path = output_path.clone();
        }
        if !self.formats.is_empty() {
            run.output_formats = self.formats.clone();
        }
        run.show_skills |= self.show_skills;
        run.strict_numbers |= self.strict_numbers;
        run.monitor |= self.monitor;

        run
    }
}
