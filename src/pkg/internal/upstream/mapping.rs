//! Maps raw JSearch job items onto [`JobRecord`].
//!
//! Provider fields are loosely typed, so everything is read out of a
//! `serde_json::Value` with a fallback for anything missing or empty.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::pkg::internal::adaptors::jobs::spec::JobRecord;

const MAX_SKILL_TAGS: usize = 3;

/// Non-empty string field.
fn text<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn strings(item: &Value, key: &str) -> Vec<String> {
    item.get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

pub fn experience_level(item: &Value) -> &'static str {
    let months = item
        .get("job_required_experience")
        .and_then(|e| e.get("required_experience_in_months"))
        .and_then(Value::as_f64);
    match months {
        Some(m) if m >= 60.0 => "Senior",
        Some(m) if m >= 24.0 => "Mid-Level",
        _ => "Entry-Level",
    }
}

/// `"<CUR> <min> - <CUR> <max>"`, only when both bounds are numbers.
pub fn format_salary(item: &Value) -> Option<String> {
    let min = item.get("job_salary_min").and_then(Value::as_f64)?;
    let max = item.get("job_salary_max").and_then(Value::as_f64)?;
    let currency = text(item, "job_salary_currency").unwrap_or("USD");
    Some(format!(
        "{currency} {} - {currency} {}",
        group_thousands(min),
        group_thousands(max)
    ))
}

/// Renders a number with comma thousands separators and at most three
/// fractional digits.
fn group_thousands(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = format!("{:.3}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Employment type followed by the first few required skills, deduplicated.
pub fn build_tags(item: &Value) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let candidates = text(item, "job_employment_type")
        .map(str::to_string)
        .into_iter()
        .chain(strings(item, "job_required_skills").into_iter().take(MAX_SKILL_TAGS));
    for tag in candidates {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn location(item: &Value) -> String {
    match (text(item, "job_city"), text(item, "job_state")) {
        (Some(city), Some(state)) => format!("{city}, {state}"),
        _ => text(item, "job_country").unwrap_or("Remote").to_string(),
    }
}

/// `index` names records the provider returned without an id.
pub fn map_job(item: &Value, index: usize) -> JobRecord {
    let logo = text(item, "employer_logo").map(str::to_string);
    JobRecord {
        id: text(item, "job_id")
            .map(str::to_string)
            .unwrap_or_else(|| format!("job_{index}")),
        title: text(item, "job_title").unwrap_or("No Title").to_string(),
        company: text(item, "employer_name")
            .unwrap_or("Unknown Company")
            .to_string(),
        company_logo: logo.clone(),
        location: location(item),
        job_type: text(item, "job_employment_type")
            .unwrap_or("Full-time")
            .to_string(),
        experience_level: experience_level(item).to_string(),
        salary: format_salary(item),
        description: Some(
            text(item, "job_description")
                .unwrap_or("No description available")
                .to_string(),
        ),
        requirements: strings(item, "job_required_skills"),
        responsibilities: Vec::new(),
        benefits: Vec::new(),
        logo,
        tags: build_tags(item),
        posted_date: text(item, "job_posted_at_datetime_utc")
            .map(str::to_string)
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        category: None,
        is_remote: Some(truthy(item.get("job_is_remote"))),
    }
}

/// Items under the response's `data` array; anything else counts as no jobs.
pub fn map_jobs(body: &Value) -> Vec<JobRecord> {
    body.get("data")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .enumerate()
                .map(|(i, item)| map_job(item, i))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn full_item_maps_every_field() {
        let item = json!({
            "job_id": "abc123",
            "job_title": "Backend Engineer",
            "employer_name": "Paystack",
            "employer_logo": "https://logo.example/paystack.png",
            "job_city": "Lagos",
            "job_state": "LA",
            "job_country": "NG",
            "job_employment_type": "Full-time",
            "job_required_experience": { "required_experience_in_months": 36 },
            "job_salary_min": 50000,
            "job_salary_max": 70000,
            "job_salary_currency": "NGN",
            "job_description": "Build payments.",
            "job_required_skills": ["Rust", "Postgres", "Kafka", "gRPC"],
            "job_posted_at_datetime_utc": "2026-10-01T09:00:00.000Z",
            "job_is_remote": true
        });
        let job = map_job(&item, 0);

        assert_eq!(job.id, "abc123");
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.company, "Paystack");
        assert_eq!(job.logo.as_deref(), Some("https://logo.example/paystack.png"));
        assert_eq!(job.location, "Lagos, LA");
        assert_eq!(job.job_type, "Full-time");
        assert_eq!(job.experience_level, "Mid-Level");
        assert_eq!(job.salary.as_deref(), Some("NGN 50,000 - NGN 70,000"));
        assert_eq!(job.requirements.len(), 4);
        assert_eq!(job.tags, vec!["Full-time", "Rust", "Postgres", "Kafka"]);
        assert_eq!(job.posted_date, "2026-10-01T09:00:00.000Z");
        assert_eq!(job.is_remote, Some(true));
        assert!(job.category.is_none());
    }

    #[test]
    fn sparse_item_falls_back() {
        let job = map_job(&json!({ "job_country": "" , "job_city": "Accra" }), 4);
        assert_eq!(job.id, "job_4");
        assert_eq!(job.title, "No Title");
        assert_eq!(job.company, "Unknown Company");
        assert_eq!(job.location, "Remote");
        assert_eq!(job.job_type, "Full-time");
        assert_eq!(job.experience_level, "Entry-Level");
        assert_eq!(job.description.as_deref(), Some("No description available"));
        assert!(job.salary.is_none());
        assert!(job.tags.is_empty());
        assert!(!job.posted_date.is_empty());
        assert_eq!(job.is_remote, Some(false));

        let job = map_job(&json!({ "job_country": "GH" }), 0);
        assert_eq!(job.location, "GH");
    }

    #[test]
    fn experience_thresholds() {
        let level = |months: Value| {
            experience_level(&json!({ "job_required_experience": { "required_experience_in_months": months } }))
        };
        assert_eq!(level(json!(60)), "Senior");
        assert_eq!(level(json!(59)), "Mid-Level");
        assert_eq!(level(json!(24)), "Mid-Level");
        assert_eq!(level(json!(23)), "Entry-Level");
        assert_eq!(level(json!("60")), "Entry-Level");
        assert_eq!(experience_level(&json!({})), "Entry-Level");
    }

    #[test]
    fn salary_needs_both_bounds() {
        assert_eq!(
            format_salary(&json!({ "job_salary_min": 50000, "job_salary_max": 1250000.5 })).as_deref(),
            Some("USD 50,000 - USD 1,250,000.5")
        );
        assert!(format_salary(&json!({ "job_salary_min": 50000 })).is_none());
        assert!(format_salary(&json!({ "job_salary_min": "50000", "job_salary_max": 1 })).is_none());
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
    }

    #[test]
    fn tags_are_deduplicated() {
        let item = json!({
            "job_employment_type": "Contract",
            "job_required_skills": ["Contract", "Go", "Go"]
        });
        assert_eq!(build_tags(&item), vec!["Contract", "Go"]);
    }

    #[test]
    fn non_array_data_is_empty() {
        assert!(map_jobs(&json!({ "data": { "job_id": "x" } })).is_empty());
        assert!(map_jobs(&json!({})).is_empty());
        assert_eq!(map_jobs(&json!({ "data": [{}, {}] })).len(), 2);
    }
}
