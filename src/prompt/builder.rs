use crate::models::{CareProfile, Message};

/// How many trailing log messages a prompt carries by default. Overridable
/// through `chat.history_window` in the config file or `CARE_HISTORY_WINDOW`.
pub const DEFAULT_HISTORY_WINDOW: usize = 20;

/// Rendered in place of history lines when the window is empty.
pub const NO_HISTORY_MARKER: &str = "(no prior messages)";

const PERSONA: &str = "You are Careloop, an experienced companion coach for families caring for a neurodivergent loved one.
GOAL: Offer support, emotional containment, and practical strategies with calm professional steadiness.
PERSONALITY: Resolute, calm, expert. Convey confidence without disclaimer phrases (\"I am not a doctor\"). Show real familiarity with the subject.
FORMAT: Answer briefly and directly (4-6 sentences at most). Use bold (**text**) for key concepts. Use lists only when there are practical steps.";

const FALLBACK_CAREGIVER: &str = "the caregiver";
const FALLBACK_RECIPIENT: &str = "their loved one";
const FALLBACK_AGE: &str = "age not given";
const FALLBACK_DIAGNOSIS: &str = "No diagnosis recorded; general guidance wanted";
const FALLBACK_DETAIL: &str = "Not specified";
const FALLBACK_CHALLENGE: &str = "Nothing specific named today";

/// Assemble the full text payload for one generation request.
///
/// Pure and deterministic: identical inputs produce byte-identical output,
/// and every profile slot falls back to a fixed phrase when blank. Only the
/// history is windowed; the current message is never truncated.
pub fn build_prompt(
    user_message: &str,
    profile: &CareProfile,
    history: &[Message],
    hours_since_last: Option<f64>,
    declared_topic: Option<&str>,
    history_window: usize,
) -> String {
    format!(
        "{persona}\nCONTEXT:\n\
         - Caregiver: {caregiver}\n\
         - Loved one: {recipient} ({age})\n\
         - Diagnosis: {diagnosis}\n\
         - Communication style: {communication}\n\
         - Sensory sensitivities: {sensory}\n\
         - Special interests: {interests}\n\
         - Triggers: {triggers}\n\
         - Calming strategies: {calming}\n\
         - Strengths: {strengths}\n\
         - Energy level: {energy}\n\
         - Current challenge: {challenge}\n\
         TIME: {time}\n\
         TOPIC: {topic}\n\
         HISTORY:\n{history}\n\
         CURRENT MESSAGE: \"{message}\"\n\
         Respond with resolute empathy.\n",
        persona = PERSONA,
        caregiver = or_fallback(&profile.caregiver_name, FALLBACK_CAREGIVER),
        recipient = or_fallback(&profile.recipient_name, FALLBACK_RECIPIENT),
        age = or_fallback(&profile.age, FALLBACK_AGE),
        diagnosis = or_fallback(&profile.diagnosis, FALLBACK_DIAGNOSIS),
        communication = or_fallback(&profile.communication_style, FALLBACK_DETAIL),
        sensory = or_fallback(&profile.sensory_sensitivities, FALLBACK_DETAIL),
        interests = or_fallback(&profile.special_interests, FALLBACK_DETAIL),
        triggers = or_fallback(&profile.triggers, FALLBACK_DETAIL),
        calming = or_fallback(&profile.calming_strategies, FALLBACK_DETAIL),
        strengths = or_fallback(&profile.strengths, FALLBACK_DETAIL),
        energy = or_fallback(&profile.energy_level, FALLBACK_DETAIL),
        challenge = or_fallback(&profile.current_challenge, FALLBACK_CHALLENGE),
        time = temporal_hint(hours_since_last),
        topic = topic_hint(declared_topic),
        history = render_history(history, history_window),
        message = user_message,
    )
}

/// Classify elapsed time into one of three fixed sentences. The two-hour
/// boundary is exclusive: exactly 2.0 hours reads as "approximately 2
/// hours".
pub fn temporal_hint(hours_since_last: Option<f64>) -> String {
    match hours_since_last {
        None => "Time since the last message is unknown.".to_string(),
        Some(h) if h < 2.0 => "Little time has passed since the last message.".to_string(),
        Some(h) => format!(
            "Approximately {} hours have passed since the last message.",
            h.round() as i64
        ),
    }
}

fn topic_hint(declared_topic: Option<&str>) -> String {
    match declared_topic {
        Some(topic) if !topic.trim().is_empty() => format!("Declared topic: \"{topic}\"."),
        _ => "No topic was declared; infer the focus from the message.".to_string(),
    }
}

/// Render the trailing `window` messages oldest-first, one labelled line
/// per message.
fn render_history(history: &[Message], window: usize) -> String {
    let start = history.len().saturating_sub(window);
    let windowed = &history[start..];
    if windowed.is_empty() {
        return NO_HISTORY_MARKER.to_string();
    }
    windowed
        .iter()
        .map(|m| format!("{}: {}", m.role.speaker_label(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
