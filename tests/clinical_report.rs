use careloop::models::{DailyLog, Factor, JournalEntry, Mood};
use careloop::report::{
    build_report_data, direct_report_prompt, is_valid_range, REPORT_SYSTEM_PROMPT,
};
use chrono::{Duration, Local};

#[test]
fn test_valid_ranges() {
    assert!(is_valid_range(7));
    assert!(is_valid_range(15));
    assert!(is_valid_range(30));
    assert!(is_valid_range(60));
    assert!(!is_valid_range(0));
    assert!(!is_valid_range(14));
    assert!(!is_valid_range(-7));
}

#[test]
fn test_data_block_layout() {
    let now = Local::now();
    let logs = vec![DailyLog::new(
        Mood::Good,
        Some(Factor::Routine),
        now - Duration::days(1),
    )];
    let entries = vec![JournalEntry::milestone(
        "First calm bath",
        "FAMILY: we did it",
        None,
        now - Duration::days(2),
    )];

    let data = build_report_data("Leo", 30, &logs, &entries, now);
    assert!(data.starts_with("PATIENT: Leo\nPERIOD: Last 30 days.\n"));
    assert!(data.contains(&format!("- {}: Mood good (routine)", logs[0].date)));
    assert!(data.contains("First calm bath - FAMILY: we did it..."));
}

#[test]
fn test_identical_inputs_produce_identical_blocks() {
    let now = Local::now();
    let logs = vec![DailyLog::new(Mood::Hard, Some(Factor::Sleep), now)];
    let entries = vec![JournalEntry::milestone("Win", "FAMILY: small win", None, now)];
    let first = build_report_data("Leo", 15, &logs, &entries, now);
    let second = build_report_data("Leo", 15, &logs, &entries, now);
    assert_eq!(first, second);
}

#[test]
fn test_records_outside_the_period_are_dropped() {
    let now = Local::now();
    let logs = vec![
        DailyLog::new(Mood::Hard, None, now - Duration::days(2)),
        DailyLog::new(Mood::Good, None, now - Duration::days(40)),
    ];
    let data = build_report_data("Leo", 30, &logs, &[], now);
    assert!(data.contains("Mood hard"));
    assert!(!data.contains("Mood good"));
}

#[test]
fn test_empty_sections_render_fallback_lines() {
    let data = build_report_data("", 7, &[], &[], Local::now());
    assert!(data.contains("PATIENT: Patient\n"));
    assert!(data.contains("DAILY LOG (mood and factors):\nNo daily logs recorded.\n"));
    assert!(data.contains("MILESTONE JOURNAL (crises, wins, events):\nNo milestones recorded.\n"));
}

#[test]
fn test_long_summaries_are_clipped_to_a_prefix() {
    let now = Local::now();
    let entries = vec![JournalEntry::milestone("Long", "x".repeat(300), None, now)];
    let data = build_report_data("Leo", 30, &[], &entries, now);
    assert!(data.contains(&format!("Long - {}...", "x".repeat(100))));
    assert!(!data.contains(&"x".repeat(101)));
}

#[test]
fn test_direct_prompt_joins_system_and_data() {
    let joined = direct_report_prompt(REPORT_SYSTEM_PROMPT, "PATIENT: X");
    assert!(joined.starts_with(REPORT_SYSTEM_PROMPT));
    assert!(joined.ends_with("\n\nDATA TO ANALYZE:\nPATIENT: X"));
}
