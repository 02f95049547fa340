use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use uuid::Uuid;

use crate::error::Result;
use crate::models::{CareProfile, DailyLog, JournalEntry, Message, Schedule, SessionMarker};

/// Callback invoked with each durable message record as it is appended.
pub type MessageListener = Box<dyn Fn(&Message) + Send>;

pub(crate) type ListenerMap = Arc<Mutex<HashMap<u64, MessageListener>>>;

/// Handle returned by [`MessageLog::subscribe`]; dropping it
/// unsubscribes the listener.
pub struct Subscription {
    id: u64,
    listeners: ListenerMap,
}

impl Subscription {
    pub(crate) fn new(id: u64, listeners: ListenerMap) -> Self {
        Self { id, listeners }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}

/// Care profile document, read whole and written whole.
pub trait ProfileStore: Send + Sync {
    fn load_profile(&self) -> Result<CareProfile>;

    fn save_profile(&self, profile: &CareProfile) -> Result<()>;
}

/// The append-only conversation log.
pub trait MessageLog: Send + Sync {
    /// Append a message, assigning the authoritative storage timestamp.
    /// Returns the durable record; registered listeners observe it too.
    fn append_message(&self, message: &Message) -> Result<Message>;

    /// The most recent `limit` messages, oldest first.
    fn recent_messages(&self, limit: usize) -> Result<Vec<Message>>;

    fn clear_messages(&self) -> Result<()>;

    /// Register a listener for durable appends. The live-update push of
    /// the hosted backend, reduced to its observable contract.
    fn subscribe(&self, listener: MessageListener) -> Subscription;
}

/// The advisory session marker document.
pub trait SessionStore: Send + Sync {
    fn load_marker(&self) -> Result<SessionMarker>;

    fn save_marker(&self, marker: &SessionMarker) -> Result<()>;
}

/// Saved milestones. Entries are never deleted; the personal note is the
/// only mutable field.
pub trait JournalStore: Send + Sync {
    fn append_entry(&self, entry: &JournalEntry) -> Result<()>;

    /// All entries, newest first.
    fn journal_entries(&self) -> Result<Vec<JournalEntry>>;

    fn update_entry_note(&self, id: Uuid, note: &str) -> Result<()>;
}

/// Daily mood check-ins.
pub trait TrackerStore: Send + Sync {
    fn append_daily_log(&self, log: &DailyLog) -> Result<()>;

    /// The most recent `limit` logs, newest first.
    fn recent_daily_logs(&self, limit: usize) -> Result<Vec<DailyLog>>;
}

/// The two-day visual schedule document.
pub trait ScheduleStore: Send + Sync {
    fn load_schedule(&self) -> Result<Schedule>;

    fn save_schedule(&self, schedule: &Schedule) -> Result<()>;
}
