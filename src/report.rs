use chrono::{DateTime, Duration, Local};
use serde_json::Value;

use crate::api::{
    extract_proxy_result, extract_reply, request_generate, request_proxy, GenerateRequest,
    ProxyGenerateRequest,
};
use crate::config::Config;
use crate::error::{CareloopError, Result};
use crate::models::{CareProfile, DailyLog, JournalEntry};

/// Reporting periods a caregiver can pick from, in days.
pub const REPORT_RANGES: &[i64] = &[7, 15, 30, 60];

pub const DEFAULT_REPORT_DAYS: i64 = 30;

/// How much raw material a report may draw on.
pub const REPORT_LOG_CAP: usize = 100;
pub const REPORT_ENTRY_CAP: usize = 50;

/// How many characters of a milestone summary make it into the data block.
const SUMMARY_PREFIX_LEN: usize = 100;

pub const REPORT_SYSTEM_PROMPT: &str = "Act as an expert clinical assistant. Write a CONDENSED CLINICAL REPORT for a neurologist or psychiatrist.
Use formal, medical, objective language.
Structure:
1. GENERAL SUMMARY: Mood and regulation trend.
2. IDENTIFIED TRIGGER FACTORS: Patterns (sleep, routines, etc).
3. RELEVANT MILESTONES: Crises or significant progress.
4. OBSERVATIONS: Suggestions based on the data.

Do not invent data. If there is not enough information, say so.";

pub fn is_valid_range(days: i64) -> bool {
    REPORT_RANGES.contains(&days)
}

/// Render the deterministic data block the report request carries. Logs
/// and entries outside the period are dropped; an empty section renders
/// its explicit fallback line rather than disappearing.
pub fn build_report_data(
    patient_name: &str,
    days: i64,
    logs: &[DailyLog],
    entries: &[JournalEntry],
    now: DateTime<Local>,
) -> String {
    let start = now - Duration::days(days);

    let log_lines = logs
        .iter()
        .filter(|l| l.created_at >= start)
        .map(|l| {
            let factors = l
                .factors
                .iter()
                .map(|f| f.label())
                .collect::<Vec<_>>()
                .join(", ");
            format!("- {}: Mood {} ({})", l.date, l.mood.label(), factors)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let entry_lines = entries
        .iter()
        .filter(|e| e.created_at >= start)
        .map(|e| {
            let prefix: String = e.summary.chars().take(SUMMARY_PREFIX_LEN).collect();
            format!(
                "- {}: {} - {}...",
                e.created_at.format("%Y-%m-%d"),
                e.title,
                prefix
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let patient = if patient_name.trim().is_empty() {
        "Patient"
    } else {
        patient_name
    };

    format!(
        "PATIENT: {}\nPERIOD: Last {} days.\n\nDAILY LOG (mood and factors):\n{}\n\nMILESTONE JOURNAL (crises, wins, events):\n{}\n",
        patient,
        days,
        if log_lines.is_empty() {
            "No daily logs recorded."
        } else {
            &log_lines
        },
        if entry_lines.is_empty() {
            "No milestones recorded."
        } else {
            &entry_lines
        },
    )
}

/// How the direct path joins the two halves; the proxy's `/generate` path
/// does the same concatenation server-side.
pub fn direct_report_prompt(system_prompt: &str, report_data: &str) -> String {
    format!("{}\n\nDATA TO ANALYZE:\n{}", system_prompt, report_data)
}

/// Assemble the data block for the given period and run it through the
/// generation path.
pub async fn generate_report(
    config: &Config,
    profile: &CareProfile,
    logs: &[DailyLog],
    entries: &[JournalEntry],
    days: i64,
) -> Result<String> {
    if !is_valid_range(days) {
        return Err(CareloopError::ConfigError(format!(
            "unsupported report period: {} days (choose one of 7, 15, 30, 60)",
            days
        )));
    }

    let report_data = build_report_data(
        &profile.recipient_name,
        days,
        logs,
        entries,
        Local::now(),
    );

    if let Some(proxy_url) = &config.proxy_url {
        let body = ProxyGenerateRequest {
            prompt_data: report_data,
            system_prompt: REPORT_SYSTEM_PROMPT.to_string(),
        };
        let response = request_proxy(proxy_url, "generate", &body).await?;
        let status = response.status().as_u16();
        let json: Value = response.json().await?;
        return extract_proxy_result(status, &json);
    }

    let api_key = config.require_api_key()?;
    let body = GenerateRequest::from_text(direct_report_prompt(REPORT_SYSTEM_PROMPT, &report_data));
    let response = request_generate(api_key, &config.api_endpoint, &config.model, &body).await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await?;
        return Err(CareloopError::ApiError { status, message });
    }

    let json: Value = response.json().await?;
    extract_reply(&json)
}
