use careloop::models::{CareProfile, Message};
use careloop::prompt::{build_prompt, temporal_hint, DEFAULT_HISTORY_WINDOW, NO_HISTORY_MARKER};

fn sample_profile() -> CareProfile {
    let mut profile = CareProfile::default();
    profile.set_field("caregiver-name", "Ana");
    profile.set_field("recipient-name", "Leo");
    profile.set_field("age", "7");
    profile.set_field("diagnosis", "Autism spectrum, level 2");
    profile.set_field("triggers", "Loud noises");
    profile
}

fn history_of(len: usize) -> Vec<Message> {
    (0..len)
        .map(|i| {
            if i % 2 == 0 {
                Message::user(format!("message {i}"), i as i64)
            } else {
                Message::assistant(format!("reply {i}"), i as i64)
            }
        })
        .collect()
}

fn history_section(prompt: &str) -> Vec<&str> {
    let start = prompt.find("HISTORY:\n").unwrap() + "HISTORY:\n".len();
    let end = prompt.find("\nCURRENT MESSAGE:").unwrap();
    prompt[start..end].lines().collect()
}

#[test]
fn test_identical_inputs_produce_identical_prompts() {
    let profile = sample_profile();
    let history = history_of(6);
    let first = build_prompt(
        "rough morning",
        &profile,
        &history,
        Some(3.4),
        Some("Crisis"),
        DEFAULT_HISTORY_WINDOW,
    );
    let second = build_prompt(
        "rough morning",
        &profile,
        &history,
        Some(3.4),
        Some("Crisis"),
        DEFAULT_HISTORY_WINDOW,
    );
    assert_eq!(first, second);
}

#[test]
fn test_sections_appear_in_fixed_order() {
    let prompt = build_prompt(
        "hello",
        &sample_profile(),
        &history_of(2),
        None,
        None,
        DEFAULT_HISTORY_WINDOW,
    );
    let context = prompt.find("CONTEXT:").unwrap();
    let time = prompt.find("TIME:").unwrap();
    let topic = prompt.find("TOPIC:").unwrap();
    let history = prompt.find("HISTORY:").unwrap();
    let current = prompt.find("CURRENT MESSAGE:").unwrap();
    assert!(context < time);
    assert!(time < topic);
    assert!(topic < history);
    assert!(history < current);
    assert!(prompt.ends_with("Respond with resolute empathy.\n"));
}

#[test]
fn test_empty_profile_fields_fall_back_to_fixed_phrases() {
    let prompt = build_prompt(
        "hi",
        &CareProfile::default(),
        &[],
        None,
        None,
        DEFAULT_HISTORY_WINDOW,
    );
    assert!(prompt.contains("- Caregiver: the caregiver\n"));
    assert!(prompt.contains("- Loved one: their loved one (age not given)\n"));
    assert!(prompt.contains("- Diagnosis: No diagnosis recorded; general guidance wanted\n"));
    assert!(prompt.contains("- Communication style: Not specified\n"));
    assert!(prompt.contains("- Current challenge: Nothing specific named today\n"));
}

#[test]
fn test_filled_profile_fields_are_used_verbatim() {
    let prompt = build_prompt(
        "hi",
        &sample_profile(),
        &[],
        None,
        None,
        DEFAULT_HISTORY_WINDOW,
    );
    assert!(prompt.contains("- Caregiver: Ana\n"));
    assert!(prompt.contains("- Loved one: Leo (7)\n"));
    assert!(prompt.contains("- Triggers: Loud noises\n"));
    // unfilled fields in the same profile still fall back
    assert!(prompt.contains("- Communication style: Not specified\n"));
    assert!(prompt.contains("- Current challenge: Nothing specific named today\n"));
}

#[test]
fn test_first_message_from_a_blank_slate() {
    let prompt = build_prompt(
        "Hello",
        &CareProfile::default(),
        &[],
        None,
        None,
        DEFAULT_HISTORY_WINDOW,
    );
    assert!(prompt.starts_with("You are Careloop"));
    assert!(prompt.contains("- Caregiver: the caregiver\n"));
    assert!(prompt.contains("Time since the last message is unknown."));
    assert!(prompt.contains(&format!("HISTORY:\n{}\n", NO_HISTORY_MARKER)));
    assert!(!prompt.contains("FAMILY:"));
    assert!(!prompt.contains("ASSISTANT:"));
    assert!(prompt.contains("CURRENT MESSAGE: \"Hello\"\n"));
}

#[test]
fn test_empty_history_renders_marker() {
    let prompt = build_prompt(
        "hi",
        &sample_profile(),
        &[],
        None,
        None,
        DEFAULT_HISTORY_WINDOW,
    );
    assert!(prompt.contains(&format!("HISTORY:\n{}\n", NO_HISTORY_MARKER)));
}

#[test]
fn test_history_is_windowed_to_the_trailing_messages() {
    let history = history_of(25);
    let prompt = build_prompt(
        "hi",
        &sample_profile(),
        &history,
        None,
        None,
        DEFAULT_HISTORY_WINDOW,
    );
    let lines = history_section(&prompt);
    assert_eq!(lines.len(), DEFAULT_HISTORY_WINDOW);
    // the oldest five messages fell out of the window
    assert_eq!(lines[0], "ASSISTANT: reply 5");
    assert_eq!(lines[19], "FAMILY: message 24");
}

#[test]
fn test_window_override_applies() {
    let history = history_of(10);
    let prompt = build_prompt("hi", &sample_profile(), &history, None, None, 3);
    let lines = history_section(&prompt);
    assert_eq!(lines, vec!["ASSISTANT: reply 7", "FAMILY: message 8", "ASSISTANT: reply 9"]);
}

#[test]
fn test_current_message_is_never_truncated() {
    let long_message = "a".repeat(10_000);
    let prompt = build_prompt(
        &long_message,
        &sample_profile(),
        &[],
        None,
        None,
        DEFAULT_HISTORY_WINDOW,
    );
    assert!(prompt.contains(&format!("CURRENT MESSAGE: \"{}\"", long_message)));
}

#[test]
fn test_temporal_hint_sentences() {
    assert_eq!(temporal_hint(None), "Time since the last message is unknown.");
    assert_eq!(
        temporal_hint(Some(0.2)),
        "Little time has passed since the last message."
    );
    assert_eq!(
        temporal_hint(Some(1.9)),
        "Little time has passed since the last message."
    );
    // two hours exactly is already "approximately 2 hours"
    assert_eq!(
        temporal_hint(Some(2.0)),
        "Approximately 2 hours have passed since the last message."
    );
    assert_eq!(
        temporal_hint(Some(2.1)),
        "Approximately 2 hours have passed since the last message."
    );
    assert_eq!(
        temporal_hint(Some(2.6)),
        "Approximately 3 hours have passed since the last message."
    );
    assert_eq!(
        temporal_hint(Some(12.0)),
        "Approximately 12 hours have passed since the last message."
    );
}

#[test]
fn test_declared_topic_is_quoted() {
    let prompt = build_prompt(
        "hi",
        &sample_profile(),
        &[],
        None,
        Some("Sleep routines"),
        DEFAULT_HISTORY_WINDOW,
    );
    assert!(prompt.contains("TOPIC: Declared topic: \"Sleep routines\"."));
}

#[test]
fn test_missing_topic_gets_infer_hint() {
    let prompt = build_prompt(
        "hi",
        &sample_profile(),
        &[],
        None,
        None,
        DEFAULT_HISTORY_WINDOW,
    );
    assert!(prompt.contains("TOPIC: No topic was declared; infer the focus from the message."));
}
