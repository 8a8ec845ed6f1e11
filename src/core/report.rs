use crate::domain::model::{CandidateIndex, Match, Rankings};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;

pub const SKILL_SEPARATOR: &str = ", ";

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub generated_at: DateTime<Utc>,
    pub candidate_count: usize,
    pub job_count: usize,
    pub jobs: Vec<JobRanking>,
}

#[derive(Debug, Serialize)]
pub struct JobRanking {
    pub job_id: String,
    pub matches: Vec<RankedMatch>,
}

#[derive(Debug, Serialize)]
pub struct RankedMatch {
    pub rank: usize,
    pub candidate_id: String,
    pub score: f64,
    pub skills: Vec<String>,
}

/// Job ids in presentation order. The mapping itself is unordered, so
/// jobs are listed by id to keep reports reproducible.
pub fn job_order(rankings: &Rankings) -> Vec<&str> {
    let mut ids: Vec<&str> = rankings.keys().map(String::as_str).collect();
    ids.sort_unstable();
    ids
}

/// Fills `Match::skills` from the candidate records.
pub fn attach_skills(rankings: &mut Rankings, index: &CandidateIndex<'_>) {
    for matches in rankings.values_mut() {
        for m in matches.iter_mut() {
            if m.skills.is_none() {
                m.skills = index.get(&m.candidate_id).map(|c| c.skills.clone());
            }
        }
    }
}

fn display_skills(m: &Match) -> String {
    m.skills
        .as_deref()
        .map(|skills| skills.join(SKILL_SEPARATOR))
        .unwrap_or_default()
}

/// Console report: one block per job, rank is 1-based and scores have
/// two decimals.
pub fn render_text(rankings: &Rankings, show_skills: bool) -> String {
    let mut out = String::new();

    for job_id in job_order(rankings) {
        let _ = writeln!(out, "Job {}:", job_id);
        for (rank, m) in rankings[job_id].iter().enumerate() {
            if show_skills {
                let _ = writeln!(
                    out,
                    "{}. {} (Score: {:.2}, Skills: {})",
                    rank + 1,
                    m.candidate_id,
                    m.score,
                    display_skills(m)
                );
            } else {
                let _ = writeln!(out, "{}. {} (Score: {:.2})", rank + 1, m.candidate_id, m.score);
            }
        }
        out.push('\n');
    }

    out
}

pub fn render_csv(rankings: &Rankings) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["job_id", "rank", "candidate_id", "score", "skills"])?;

    for job_id in job_order(rankings) {
        for (rank, m) in rankings[job_id].iter().enumerate() {
            writer.write_record([
                job_id.to_string(),
                (rank + 1).to_string(),
                m.candidate_id.clone(),
                format!("{:.2}", m.score),
                display_skills(m),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn render_json(rankings: &Rankings, candidate_count: usize) -> Result<String> {
    let jobs = job_order(rankings)
        .into_iter()
        .map(|job_id| JobRanking {
            job_id: job_id.to_string(),
            matches: rankings[job_id]
                .iter()
                .enumerate()
                .map(|(rank, m)| RankedMatch {
                    rank: rank + 1,
                    candidate_id: m.candidate_id.clone(),
                    score: m.score,
                    skills: m.skills.clone().unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    let report = JsonReport {
        generated_at: Utc::now(),
        candidate_count,
        job_count: rankings.len(),
        jobs,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
