use anyhow::Result;
use job_matcher::core::{ConfigProvider, NumericPolicy};
use job_matcher::{LocalStorage, MatchEngine, MatchError, MatchingPipeline, RunConfig};
use std::fs;
use tempfile::TempDir;

const EMPLOYEES: &str = "\
ID,Skills,Location,Age,Experience,ExpectedSalary
C1,Python,NY,30,5,50000
C2,\"Java,Spring\",LA,41,10,20000
C3,Python,NY,22,1,10000
";

const JOBS: &str = "\
ID,Skills,Location,Experience,Budget,Vacancies
J1,Python,NY,5,50000,1
J2,Java,LA,10,40000,1
";

fn write_inputs(dir: &TempDir, employees: &str, jobs: &str) -> Result<(String, String)> {
    let employees_path = dir.path().join("employees.csv");
    let jobs_path = dir.path().join("jobs.csv");
    fs::write(&employees_path, employees)?;
    fs::write(&jobs_path, jobs)?;
    Ok((
        employees_path.to_string_lossy().into_owned(),
        jobs_path.to_string_lossy().into_owned(),
    ))
}

fn run_config(dir: &TempDir, candidates: String, jobs: String, formats: &[&str]) -> RunConfig {
    RunConfig {
        candidates_path: candidates,
        jobs_path: jobs,
        output_path: dir.path().join("out").to_string_lossy().into_owned(),
        output_formats: formats.iter().map(|f| f.to_string()).collect(),
        ..RunConfig::default()
    }
}

#[tokio::test]
async fn test_end_to_end_text_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (candidates, jobs) = write_inputs(&temp_dir, EMPLOYEES, JOBS)?;
    let config = run_config(&temp_dir, candidates, jobs, &["text"]);

    let engine = MatchEngine::new(MatchingPipeline::new(LocalStorage::default(), config));
    let bundle = engine.run().await?;

    // C1 vs J1: 1 + 1 + 1 + 0 (salary equals budget) = 3.00
    // C3 vs J1: 1 + 1 + 0.2 + 0.8 = 3.00, tie keeps input order
    // C2 vs J1: 0 + 0 + 1 + 0.6 = 1.60
    // C1 vs J2: 0 + 0 + 0.5 + 0 = 0.50
    assert_eq!(
        bundle.text,
        "Job J1:\n\
         1. C1 (Score: 3.00)\n\
         2. C3 (Score: 3.00)\n\
         3. C2 (Score: 1.60)\n\
         \n\
         Job J2:\n\
         1. C2 (Score: 3.50)\n\
         2. C3 (Score: 0.85)\n\
         3. C1 (Score: 0.50)\n\
         \n"
    );
    assert_eq!(bundle.job_count, 2);
    assert_eq!(bundle.match_count, 6);
    assert!(bundle.written_files.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_writes_csv_and_json() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (candidates, jobs) = write_inputs(&temp_dir, EMPLOYEES, JOBS)?;
    let mut config = run_config(&temp_dir, candidates, jobs, &["text", "csv", "json"]);
    config.show_skills = true;

    let engine = MatchEngine::new_with_monitoring(
        MatchingPipeline::new(LocalStorage::default(), config),
        false,
    );
    let bundle = engine.run().await?;

    assert!(bundle.text.contains("1. C2 (Score: 3.50, Skills: Java, Spring)"));

    let out_dir = temp_dir.path().join("out");
    let csv = fs::read_to_string(out_dir.join("matches.csv"))?;
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("job_id,rank,candidate_id,score,skills"));
    assert_eq!(lines.next(), Some("J1,1,C1,3.00,Python"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(out_dir.join("matches.json"))?)?;
    assert_eq!(json["candidate_count"], 3);
    assert_eq!(json["jobs"][1]["job_id"], "J2");
    assert_eq!(json["jobs"][1]["matches"][0]["skills"][1], "Spring");
    assert_eq!(bundle.written_files.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_empty_candidates_list_every_job() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (candidates, jobs) = write_inputs(
        &temp_dir,
        "ID,Skills,Location,Age,Experience,ExpectedSalary\n",
        JOBS,
    )?;
    let config = run_config(&temp_dir, candidates, jobs, &["text"]);

    let bundle = MatchEngine::new(MatchingPipeline::new(LocalStorage::default(), config))
        .run()
        .await?;
    assert_eq!(bundle.text, "Job J1:\n\nJob J2:\n\n");
    assert_eq!(bundle.match_count, 0);
    Ok(())
}

#[tokio::test]
async fn test_empty_jobs_give_empty_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (candidates, jobs) = write_inputs(
        &temp_dir,
        EMPLOYEES,
        "ID,Skills,Location,Experience,Budget,Vacancies\n",
    )?;
    let config = run_config(&temp_dir, candidates, jobs, &["text"]);

    let bundle = MatchEngine::new(MatchingPipeline::new(LocalStorage::default(), config))
        .run()
        .await?;
    assert!(bundle.text.is_empty());
    assert_eq!(bundle.job_count, 0);
    Ok(())
}

#[tokio::test]
async fn test_missing_source_aborts_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (candidates, _) = write_inputs(&temp_dir, EMPLOYEES, JOBS)?;
    let missing = temp_dir.path().join("nope.csv").to_string_lossy().into_owned();
    let config = run_config(&temp_dir, candidates, missing, &["text", "csv"]);

    let result = MatchEngine::new(MatchingPipeline::new(LocalStorage::default(), config))
        .run()
        .await;

    assert!(matches!(result, Err(MatchError::SourceUnavailable { .. })));
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[tokio::test]
async fn test_zero_budget_job_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (candidates, jobs) = write_inputs(
        &temp_dir,
        EMPLOYEES,
        "ID,Skills,Location,Experience,Budget,Vacancies\nJ9,Python,NY,3,n/a,1\n",
    )?;
    let config = run_config(&temp_dir, candidates, jobs, &["text"]);
    assert_eq!(config.numeric_policy(), NumericPolicy::Lenient);

    // 預算欄位無法解析 -> 0 -> 無法計分
    let result = MatchEngine::new(MatchingPipeline::new(LocalStorage::default(), config))
        .run()
        .await;
    match result {
        Err(MatchError::DegenerateJob { job_id, field }) => {
            assert_eq!(job_id, "J9");
            assert_eq!(field, "budget");
        }
        other => panic!("expected DegenerateJob, got {:?}", other.map(|b| b.text)),
    }
    Ok(())
}

#[tokio::test]
async fn test_strict_numbers_fail_before_ranking() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (candidates, jobs) = write_inputs(
        &temp_dir,
        "ID,Skills,Location,Age,Experience,ExpectedSalary\nC1,Go,NY,thirty,2,100\n",
        JOBS,
    )?;
    let mut config = run_config(&temp_dir, candidates, jobs, &["text"]);
    config.strict_numbers = true;

    let result = MatchEngine::new(MatchingPipeline::new(LocalStorage::default(), config))
        .run()
        .await;
    assert!(matches!(
        result,
        Err(MatchError::InvalidNumber { ref field, line: 2, .. }) if field == "age"
    ));
    Ok(())
}

#[tokio::test]
async fn test_inspect_loads_without_ranking() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (candidates, jobs) = write_inputs(&temp_dir, EMPLOYEES, JOBS)?;
    let config = run_config(&temp_dir, candidates, jobs, &["csv"]);

    let engine = MatchEngine::new(MatchingPipeline::new(LocalStorage::default(), config));
    let input = engine.inspect().await?;

    assert_eq!(input.candidates.len(), 3);
    assert_eq!(input.jobs.len(), 2);
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[tokio::test]
async fn test_bundled_sample_data() -> Result<()> {
    let root = env!("CARGO_MANIFEST_DIR");
    let config = RunConfig {
        candidates_path: format!("{}/csv/employees.csv", root),
        jobs_path: format!("{}/csv/jobs.csv", root),
        ..RunConfig::default()
    };

    let bundle = MatchEngine::new(MatchingPipeline::new(LocalStorage::default(), config))
        .run()
        .await?;

    assert_eq!(bundle.job_count, 5);
    assert_eq!(bundle.match_count, 5 * 8);
    assert!(bundle.text.contains("Job J001:\n1. E001 "));
    Ok(())
}
