use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A job seeker as read from the candidate source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub skills: Vec<String>,
    pub location: String,
    /// Informational only; not used for scoring.
    pub age: u32,
    pub experience: u32,
    pub expected_salary: u64,
}

/// An opening as read from the job source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub skills: Vec<String>,
    pub location: String,
    pub required_experience: u32,
    pub budget: u64,
    /// Carried through but never enforced against the ranking length.
    pub vacancies: u32,
}

/// A candidate scored against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub candidate_id: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// A job scored from one candidate's side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub job_id: String,
    pub score: f64,
}

/// Job id to candidates sorted by descending score.
pub type Rankings = HashMap<String, Vec<Match>>;

#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    pub job_rankings: Rankings,
    /// Candidate id to jobs sorted by descending score. Computed alongside
    /// the job rankings but never used to change them.
    pub candidate_preferences: HashMap<String, Vec<Preference>>,
}

/// Both record sets after extraction.
#[derive(Debug, Clone, Default)]
pub struct MatchInput {
    pub candidates: Vec<Candidate>,
    pub jobs: Vec<Job>,
}

/// Rendered report bodies keyed by output format.
#[derive(Debug, Clone, Default)]
pub struct ReportBundle {
    pub text: String,
    pub csv: Option<String>,
    pub json: Option<String>,
    pub job_count: usize,
    pub match_count: usize,
    /// Files written through the storage port.
    pub written_files: Vec<String>,
}

/// Candidate lookup by id for presentation.
#[derive(Debug, Default)]
pub struct CandidateIndex<'a> {
    by_id: HashMap<&'a str, &'a Candidate>,
}

impl<'a> CandidateIndex<'a> {
    pub fn new(candidates: &'a [Candidate]) -> Self {
        let mut by_id = HashMap::with_capacity(candidates.len());
        for candidate in candidates {
            // 重複 id 時保留第一筆，與線性搜尋的結果一致
            by_id.entry(candidate.id.as_str()).or_insert(candidate);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Candidate> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
