/// Keywords that route a message to the safety alert instead of the
/// generation path. Substring match on the lowercased message.
pub const SAFETY_KEYWORDS: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "end my life",
    "want to die",
    "hurt myself",
    "emergency",
    "911",
    "988",
];

/// True when the outgoing message must be intercepted by the safety
/// alert. An intercepted message is never persisted, never reaches the
/// prompt builder, and never reaches the generation client.
pub fn is_safety_trigger(message: &str) -> bool {
    let lower_message = message.to_lowercase();
    SAFETY_KEYWORDS
        .iter()
        .any(|&keyword| lower_message.contains(keyword))
}
