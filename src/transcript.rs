use uuid::Uuid;

use crate::models::{Message, Role};

/// In-memory view of the conversation for one turn. Outgoing messages are
/// appended optimistically before the durable write resolves; once the
/// store's record arrives it replaces the pending entry, keyed by the
/// stable client id, so nothing renders twice.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the view from the store. Entries are expected in storage
    /// timestamp order (ascending).
    pub fn seed(entries: Vec<Message>) -> Self {
        Self { entries }
    }

    pub fn messages(&self) -> &[Message] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drop the visible entries. The stored log is not touched.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Optimistically append a not-yet-durable message and return the
    /// client id the durable record must carry to reconcile it.
    pub fn append_pending(&mut self, message: Message) -> Uuid {
        let client_id = message.client_id;
        self.entries.push(message);
        client_id
    }

    /// Fold the durable record into the view. A pending entry with the
    /// same client id is replaced in place; an unknown id is appended.
    /// Either way the view is re-sorted into storage timestamp order.
    pub fn reconcile(&mut self, durable: Message) {
        match self
            .entries
            .iter_mut()
            .find(|m| m.client_id == durable.client_id)
        {
            Some(slot) => *slot = durable,
            None => self.entries.push(durable),
        }
        self.entries.sort_by_key(|m| {
            m.stored_at
                .map(|t| t.timestamp_millis())
                .unwrap_or(m.timestamp)
        });
    }

    /// The newest entry that is not the system greeting.
    pub fn last_non_system(&self) -> Option<&Message> {
        self.entries.iter().rev().find(|m| m.role != Role::System)
    }

    /// Hours between `now` (epoch millis) and the newest non-system
    /// entry; `None` when there is no prior message.
    pub fn hours_since_last(&self, now_millis: i64) -> Option<f64> {
        self.last_non_system()
            .map(|m| (now_millis - m.timestamp) as f64 / 3_600_000.0)
    }
}
