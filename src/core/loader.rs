use crate::domain::model::{Candidate, Job};
use crate::domain::ports::NumericPolicy;
use crate::utils::error::{MatchError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::str::FromStr;

/// Columns every candidate and job row must have.
pub const RECORD_COLUMNS: usize = 6;

/// Per-source bookkeeping from a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub records: usize,
    /// Numeric fields that failed to parse and were read as 0.
    pub coerced_fields: usize,
}

/// Parses candidate rows: id, skills, location, age, experience, expected salary.
pub fn parse_candidates(
    data: &[u8],
    source_name: &str,
    policy: NumericPolicy,
) -> Result<(Vec<Candidate>, LoadReport)> {
    parse_rows(data, source_name, policy, |row| {
        Ok(Candidate {
            id: row.text(0),
            skills: row.skills(1),
            location: row.text(2),
            age: row.number("age", 3)?,
            experience: row.number("experience", 4)?,
            expected_salary: row.number("expected_salary", 5)?,
        })
    })
}

/// Parses job rows: id, skills, location, required experience, budget, vacancies.
pub fn parse_jobs(
    data: &[u8],
    source_name: &str,
    policy: NumericPolicy,
) -> Result<(Vec<Job>, LoadReport)> {
    parse_rows(data, source_name, policy, |row| {
        Ok(Job {
            id: row.text(0),
            skills: row.skills(1),
            location: row.text(2),
            required_experience: row.number("required_experience", 3)?,
            budget: row.number("budget", 4)?,
            vacancies: row.number("vacancies", 5)?,
        })
    })
}

/// Splits a comma-joined skill field. Every fragment is kept verbatim,
/// empty ones included, so `"Python,,Go"` lists three entries. A blank
/// field means no skills.
pub fn split_skills(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(',').map(str::to_string).collect()
}

fn parse_rows<T, F>(
    data: &[u8],
    source_name: &str,
    policy: NumericPolicy,
    mut build: F,
) -> Result<(Vec<T>, LoadReport)>
where
    F: FnMut(&mut Row<'_>) -> Result<T>,
{
    // 第一列為標題列；欄位數允許不一致，短列由下方自行檢查
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let mut items = Vec::new();
    let mut report = LoadReport::default();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.len() < RECORD_COLUMNS {
            return Err(MatchError::MalformedRecord {
                source_name: source_name.to_string(),
                line,
                expected: RECORD_COLUMNS,
                found: record.len(),
            });
        }

        let mut row = Row {
            record: &record,
            source_name,
            line,
            policy,
            coerced: 0,
        };
        items.push(build(&mut row)?);
        report.coerced_fields += row.coerced;
    }

    report.records = items.len();
    tracing::debug!(
        "Parsed {} records from {} ({} numeric fields defaulted to 0)",
        report.records,
        source_name,
        report.coerced_fields
    );

    Ok((items, report))
}

struct Row<'a> {
    record: &'a StringRecord,
    source_name: &'a str,
    line: u64,
    policy: NumericPolicy,
    coerced: usize,
}

impl Row<'_> {
    fn field(&self, index: usize) -> &str {
        self.record.get(index).unwrap_or_default()
    }

    fn text(&self, index: usize) -> String {
        self.field(index).to_string()
    }

    fn skills(&self, index: usize) -> Vec<String> {
        split_skills(self.field(index))
    }

    fn number<N>(&mut self, name: &str, index: usize) -> Result<N>
    where
        N: FromStr + Default,
    {
        let raw = self.field(index);
        match raw.parse::<N>() {
            Ok(value) => Ok(value),
            Err(_) => match self.policy {
                NumericPolicy::Lenient => {
                    tracing::debug!(
                        "{} line {}: '{}' is not a valid {}, using 0",
                        self.source_name,
                        self.line,
                        raw,
                        name
                    );
                    self.coerced += 1;
                    Ok(N::default())
                }
                NumericPolicy::Strict => Err(MatchError::InvalidNumber {
                    source_name: self.source_name.to_string(),
                    line: self.line,
                    field: name.to_string(),
                    value: raw.to_string(),
                }),
            },
        }
    }
}
