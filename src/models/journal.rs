use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::message::Message;

/// How many trailing messages a milestone excerpt captures.
pub const MILESTONE_EXCERPT_LEN: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub title: String,
    /// Conversation excerpt captured when the milestone was saved.
    pub summary: String,
    #[serde(default)]
    pub user_notes: String,
    pub created_at: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl JournalEntry {
    pub fn milestone(
        title: impl Into<String>,
        summary: impl Into<String>,
        session_id: Option<String>,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            summary: summary.into(),
            user_notes: String::new(),
            created_at: now,
            session_id,
        }
    }
}

/// Render the trailing slice of a transcript into the excerpt format a
/// milestone stores: one labelled line per message, blank-line separated.
pub fn milestone_summary(messages: &[Message]) -> String {
    let start = messages.len().saturating_sub(MILESTONE_EXCERPT_LEN);
    messages[start..]
        .iter()
        .map(|m| format!("{}: {}", m.role.speaker_label(), m.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}
