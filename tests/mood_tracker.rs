use careloop::models::{DailyLog, Factor, Mood};
use chrono::Local;

#[test]
fn test_mood_weights() {
    assert_eq!(Mood::Good.value(), 3);
    assert_eq!(Mood::Okay.value(), 2);
    assert_eq!(Mood::Hard.value(), 1);
}

#[test]
fn test_mood_parse_accepts_ok_alias() {
    assert_eq!(Mood::parse("OK"), Some(Mood::Okay));
    assert_eq!(Mood::parse("good"), Some(Mood::Good));
    assert_eq!(Mood::parse("fine"), None);
}

#[test]
fn test_factor_parse() {
    assert_eq!(Factor::parse("Sensory"), Some(Factor::Sensory));
    assert_eq!(Factor::parse("weather"), None);
}

#[test]
fn test_log_records_local_date() {
    let now = Local::now();
    let log = DailyLog::new(Mood::Hard, Some(Factor::Sleep), now);
    assert_eq!(log.date, now.format("%Y-%m-%d").to_string());
    assert_eq!(log.mood_value, 1);
    assert_eq!(log.factors, vec![Factor::Sleep]);
}

#[test]
fn test_log_without_factor() {
    let log = DailyLog::new(Mood::Okay, None, Local::now());
    assert!(log.factors.is_empty());
    assert_eq!(log.mood_value, 2);
}
