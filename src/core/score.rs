use crate::domain::model::{Candidate, Job};
use crate::utils::error::{MatchError, Result};
use std::collections::HashSet;

/// Highest total a pair can reach: four terms, each capped at 1.0.
pub const MAX_SCORE: f64 = 4.0;

/// The four sub-scores of a candidate/job pair, each in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub location: f64,
    pub experience: f64,
    pub salary: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.skills + self.location + self.experience + self.salary
    }
}

/// Compatibility of `candidate` for `job`, in `[0.0, MAX_SCORE]`.
pub fn score(candidate: &Candidate, job: &Job) -> Result<f64> {
    score_breakdown(candidate, job).map(|breakdown| breakdown.total())
}

pub fn score_breakdown(candidate: &Candidate, job: &Job) -> Result<ScoreBreakdown> {
    ensure_scorable(job)?;

    Ok(ScoreBreakdown {
        skills: skill_overlap(&candidate.skills, &job.skills),
        location: location_match(&candidate.location, &job.location),
        experience: experience_fit(candidate.experience, job.required_experience),
        salary: salary_fit(candidate.expected_salary, job.budget),
    })
}

/// Rejects jobs whose terms would divide by zero.
pub fn ensure_scorable(job: &Job) -> Result<()> {
    let degenerate = if job.skills.is_empty() {
        Some("skills")
    } else if job.required_experience == 0 {
        Some("required_experience")
    } else if job.budget == 0 {
        Some("budget")
    } else {
        None
    };

    match degenerate {
        Some(field) => Err(MatchError::DegenerateJob {
            job_id: job.id.clone(),
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

/// Share of the job's skill entries the candidate has. Exact, case-sensitive.
fn skill_overlap(candidate_skills: &[String], job_skills: &[String]) -> f64 {
    let owned: HashSet<&str> = candidate_skills.iter().map(String::as_str).collect();
    let matched = job_skills
        .iter()
        .filter(|skill| owned.contains(skill.as_str()))
        .count();

    matched as f64 / job_skills.len() as f64
}

fn location_match(candidate_location: &str, job_location: &str) -> f64 {
    if candidate_location == job_location {
        1.0
    } else {
        0.0
    }
}

// 超過需求年資不再加分
fn experience_fit(experience: u32, required: u32) -> f64 {
    (f64::from(experience) / f64::from(required)).min(1.0)
}

// 期望薪資越低越好；超過預算即為 0
fn salary_fit(expected_salary: u64, budget: u64) -> f64 {
    (1.0 - expected_salary as f64 / budget as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(skills: &[&str], location: &str, experience: u32, salary: u64) -> Candidate {
        Candidate {
            id: "C".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            location: location.to_string(),
            age: 28,
            experience,
            expected_salary: salary,
        }
    }

    fn job(skills: &[&str], location: &str, required_experience: u32, budget: u64) -> Job {
        Job {
            id: "J".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            location: location.to_string(),
            required_experience,
            budget,
            vacancies: 1,
        }
    }

    #[test]
    fn test_salary_at_budget_earns_nothing() {
        let c = candidate(&["Python"], "NY", 5, 50000);
        let j = job(&["Python"], "NY", 5, 50000);

        let breakdown = score_breakdown(&c, &j).unwrap();
        assert_eq!(breakdown.skills, 1.0);
        assert_eq!(breakdown.location, 1.0);
        assert_eq!(breakdown.experience, 1.0);
        // 期望薪資剛好等於預算: 1 - 1 = 0
        assert_eq!(breakdown.salary, 0.0);
        assert_eq!(breakdown.total(), 3.0);
    }

    #[test]
    fn test_free_candidate_scores_four() {
        let c = candidate(&["Python"], "NY", 5, 0);
        let j = job(&["Python"], "NY", 5, 50000);

        assert_eq!(score(&c, &j).unwrap(), MAX_SCORE);
    }

    #[test]
    fn test_mismatched_job_scores_half() {
        let c = candidate(&["Python"], "NY", 5, 50000);
        let j = job(&["Java"], "LA", 10, 40000);

        let breakdown = score_breakdown(&c, &j).unwrap();
        assert_eq!(breakdown.skills, 0.0);
        assert_eq!(breakdown.location, 0.0);
        assert_eq!(breakdown.experience, 0.5);
        assert_eq!(breakdown.salary, 0.0);
        assert_eq!(score(&c, &j).unwrap(), 0.5);
    }

    #[test]
    fn test_skill_overlap_superset_and_disjoint() {
        let superset = candidate(&["Rust", "Go", "SQL", "Rust"], "NY", 1, 0);
        let disjoint = candidate(&["COBOL"], "NY", 1, 0);
        let j = job(&["Rust", "SQL"], "NY", 1, 100);

        assert_eq!(score_breakdown(&superset, &j).unwrap().skills, 1.0);
        assert_eq!(score_breakdown(&disjoint, &j).unwrap().skills, 0.0);
    }

    #[test]
    fn test_skill_overlap_counts_repeated_job_entries() {
        let c = candidate(&["Rust"], "NY", 1, 0);
        let j = job(&["Rust", "Rust", "Go"], "NY", 1, 100);

        assert_eq!(score_breakdown(&c, &j).unwrap().skills, 2.0 / 3.0);
    }

    #[test]
    fn test_skill_overlap_is_case_sensitive_and_partial() {
        let c = candidate(&["rust", "Go"], "NY", 1, 0);
        let j = job(&["Rust", "Go", "SQL", "Docker"], "NY", 1, 100);

        assert_eq!(score_breakdown(&c, &j).unwrap().skills, 0.25);
    }

    #[test]
    fn test_location_is_binary() {
        let j = job(&["Rust"], "NY", 1, 100);
        let same = candidate(&[], "NY", 0, 0);
        let near = candidate(&[], "ny", 0, 0);

        assert_eq!(score_breakdown(&same, &j).unwrap().location, 1.0);
        assert_eq!(score_breakdown(&near, &j).unwrap().location, 0.0);
    }

    #[test]
    fn test_experience_is_monotone_and_capped() {
        let j = job(&["Rust"], "NY", 4, 100);
        let mut previous = 0.0;
        for years in 0..10 {
            let fit = score_breakdown(&candidate(&[], "NY", years, 0), &j)
                .unwrap()
                .experience;
            assert!(fit >= previous);
            assert!(fit <= 1.0);
            if years >= 4 {
                assert_eq!(fit, 1.0);
            }
            previous = fit;
        }
    }

    #[test]
    fn test_salary_is_monotone_and_floored() {
        let j = job(&["Rust"], "NY", 1, 1000);
        let mut previous = f64::MAX;
        for salary in (0..=2000).step_by(250) {
            let fit = score_breakdown(&candidate(&[], "NY", 0, salary), &j)
                .unwrap()
                .salary;
            assert!(fit <= previous);
            assert!((0.0..=1.0).contains(&fit));
            if salary >= 1000 {
                assert_eq!(fit, 0.0);
            }
            previous = fit;
        }
        assert_eq!(score_breakdown(&candidate(&[], "NY", 0, 0), &j).unwrap().salary, 1.0);
    }

    #[test]
    fn test_score_stays_in_bounds() {
        let candidates = [
            candidate(&[], "", 0, 0),
            candidate(&["A", "B", "C"], "NY", 100, 0),
            candidate(&["A"], "LA", 1, u64::MAX),
        ];
        let jobs = [job(&["A"], "NY", 1, 1), job(&["A", "B", "D"], "LA", 50, 90000)];

        for c in &candidates {
            for j in &jobs {
                let total = score(c, j).unwrap();
                assert!((0.0..=MAX_SCORE).contains(&total), "score {} out of range", total);
            }
        }
    }

    #[test]
    fn test_degenerate_jobs_are_rejected() {
        let c = candidate(&["Rust"], "NY", 1, 10);

        let cases = [
            (job(&[], "NY", 1, 100), "skills"),
            (job(&["Rust"], "NY", 0, 100), "required_experience"),
            (job(&["Rust"], "NY", 1, 0), "budget"),
        ];
        for (j, expected_field) in cases {
            match score(&c, &j) {
                Err(MatchError::DegenerateJob { job_id, field }) => {
                    assert_eq!(job_id, "J");
                    assert_eq!(field, expected_field);
                }
                other => panic!("expected DegenerateJob, got {:?}", other),
            }
        }
    }
}
