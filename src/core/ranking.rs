use crate::core::score::score;
use crate::domain::model::{Candidate, Job, Match, MatchOutcome, Preference, Rankings};
use crate::utils::error::Result;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranks every candidate for every job by descending score.
///
/// Ties keep the order in which candidates were supplied. No vacancy limit
/// is applied and a candidate may top several jobs at once.
pub fn build_rankings(candidates: &[Candidate], jobs: &[Job]) -> Result<Rankings> {
    build_outcome(candidates, jobs).map(|outcome| outcome.job_rankings)
}

/// Builds the per-job rankings together with each candidate's own
/// preference list over the jobs. The preference lists are informational;
/// nothing is exchanged between the two sides.
pub fn build_outcome(candidates: &[Candidate], jobs: &[Job]) -> Result<MatchOutcome> {
    let mut candidate_preferences = HashMap::with_capacity(candidates.len());
    for candidate in candidates {
        let mut preferences = jobs
            .iter()
            .map(|job| {
                score(candidate, job).map(|score| Preference {
                    job_id: job.id.clone(),
                    score,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        preferences.sort_by(|a, b| descending(a.score, b.score));

        if candidate_preferences
            .insert(candidate.id.clone(), preferences)
            .is_some()
        {
            tracing::warn!("Duplicate candidate id '{}', keeping the last record", candidate.id);
        }
    }

    let mut job_rankings = HashMap::with_capacity(jobs.len());
    for job in jobs {
        let ranking = rank_candidates(candidates, job)?;
        tracing::debug!(
            "Job {}: {} candidates ranked, top score {:?}",
            job.id,
            ranking.len(),
            ranking.first().map(|m| m.score)
        );

        if job_rankings.insert(job.id.clone(), ranking).is_some() {
            tracing::warn!("Duplicate job id '{}', keeping the last record", job.id);
        }
    }

    Ok(MatchOutcome {
        job_rankings,
        candidate_preferences,
    })
}

/// Scores all candidates against one job and sorts them best first.
pub fn rank_candidates(candidates: &[Candidate], job: &Job) -> Result<Vec<Match>> {
    let mut ranking = candidates
        .iter()
        .map(|candidate| {
            score(candidate, job).map(|score| Match {
                candidate_id: candidate.id.clone(),
                score,
                skills: None,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // sort_by 為穩定排序，同分時維持輸入順序
    ranking.sort_by(|a, b| descending(a.score, b.score));
    Ok(ranking)
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
