use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;

use crate::models::StudentRecord;

pub fn load_records(
    json: Option<&Path>,
    csv: Option<&Path>,
) -> anyhow::Result<Vec<StudentRecord>> {
    match (json, csv) {
        (Some(path), _) => load_json(path),
        (None, Some(path)) => load_csv(path),
        (None, None) => anyhow::bail!("either a JSON or a CSV source must be given"),
    }
}

/// Loads a JSON array of student records, the format the dashboard serves
/// as `students.json`. The document must be an array; inside a record,
/// missing or non-numeric metrics degrade to 0 instead of failing.
pub fn load_json(path: &Path) -> anyhow::Result<Vec<StudentRecord>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let values: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of student records", path.display()))?;
    Ok(values.iter().map(record_from_value).collect())
}

fn record_from_value(value: &Value) -> StudentRecord {
    StudentRecord {
        student_id: value.get("student_id").and_then(Value::as_i64).unwrap_or(0),
        name: text_field(value, "name"),
        class_label: text_field(value, "class"),
        comprehension: metric_field(value, "comprehension"),
        attention: metric_field(value, "attention"),
        focus: metric_field(value, "focus"),
        retention: metric_field(value, "retention"),
        assessment_score: metric_field(value, "assessment_score"),
        engagement_time: metric_field(value, "engagement_time"),
        persona: value
            .get("persona")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

fn metric_field(value: &Value, field: &str) -> f64 {
    value.get(field).and_then(Value::as_f64).unwrap_or(0.0)
}

fn text_field(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub fn load_csv(path: &Path) -> anyhow::Result<Vec<StudentRecord>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_csv(file)
}

fn parse_csv<R: std::io::Read>(input: R) -> anyhow::Result<Vec<StudentRecord>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        #[serde(default)]
        student_id: i64,
        #[serde(default)]
        name: String,
        #[serde(default, rename = "class")]
        class_label: String,
        #[serde(default, deserialize_with = "lenient_metric")]
        comprehension: f64,
        #[serde(default, deserialize_with = "lenient_metric")]
        attention: f64,
        #[serde(default, deserialize_with = "lenient_metric")]
        focus: f64,
        #[serde(default, deserialize_with = "lenient_metric")]
        retention: f64,
        #[serde(default, deserialize_with = "lenient_metric")]
        assessment_score: f64,
        #[serde(default, deserialize_with = "lenient_metric")]
        engagement_time: f64,
        #[serde(default)]
        persona: Option<String>,
    }

    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        records.push(StudentRecord {
            student_id: row.student_id,
            name: row.name,
            class_label: row.class_label,
            comprehension: row.comprehension,
            attention: row.attention,
            focus: row.focus,
            retention: row.retention,
            assessment_score: row.assessment_score,
            engagement_time: row.engagement_time,
            persona: row.persona.filter(|p| !p.is_empty()),
        });
    }

    Ok(records)
}

/// Metric cells that fail to parse count as 0, matching the JSON path.
fn lenient_metric<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(0.0))
}
