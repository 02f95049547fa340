use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    /// Speaker label used when a message is rendered into a prompt or a
    /// journal excerpt. Everything that is not the family speaks with the
    /// assistant's voice, including the system greeting.
    pub fn speaker_label(&self) -> &'static str {
        match self {
            Role::User => "FAMILY",
            Role::Assistant | Role::System => "ASSISTANT",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Client-supplied creation time, epoch milliseconds.
    pub timestamp: i64,
    /// Stable client-generated identity; the reconciliation key between the
    /// optimistic in-memory view and the durable record.
    pub client_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Authoritative time assigned by the store on append. `None` while the
    /// record only exists in the optimistic view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_at: Option<DateTime<Local>>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
            client_id: Uuid::new_v4(),
            session_id: None,
            stored_at: None,
        }
    }

    pub fn user(content: impl Into<String>, timestamp: i64) -> Self {
        Self::new(Role::User, content, timestamp)
    }

    pub fn assistant(content: impl Into<String>, timestamp: i64) -> Self {
        Self::new(Role::Assistant, content, timestamp)
    }

    pub fn with_session(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id;
        self
    }

    /// A message is pending until the store has assigned its
    /// authoritative timestamp.
    pub fn is_pending(&self) -> bool {
        self.stored_at.is_none()
    }
}
