use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Advisory record of the most recent conversational session. The marker
/// labels new messages and feeds the continuity decision; it never scopes
/// what history is retrieved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionMarker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_interaction_at: Option<DateTime<Local>>,
}

impl SessionMarker {
    /// Mint a fresh session id from the wall clock.
    pub fn mint_session_id(now: DateTime<Local>) -> String {
        format!("session-{}", now.timestamp_millis())
    }

    pub fn begin(&mut self, now: DateTime<Local>) -> String {
        let id = Self::mint_session_id(now);
        self.active_session_id = Some(id.clone());
        self.last_interaction_at = Some(now);
        id
    }

    pub fn touch(&mut self, now: DateTime<Local>) {
        self.last_interaction_at = Some(now);
    }

    /// Hours elapsed since the last recorded interaction, if any.
    pub fn hours_since_last(&self, now: DateTime<Local>) -> Option<f64> {
        self.last_interaction_at
            .map(|t| (now - t).num_milliseconds() as f64 / 3_600_000.0)
    }
}
