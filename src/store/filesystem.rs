use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::storage::{
    JournalStore, ListenerMap, MessageListener, MessageLog, ProfileStore, ScheduleStore,
    SessionStore, Subscription, TrackerStore,
};
use crate::config::default_data_dir;
use crate::error::{CareloopError, Result};
use crate::models::{CareProfile, DailyLog, JournalEntry, Message, Schedule, SessionMarker};

const PROFILE_DOC: &str = "profile.json";
const MESSAGES_DOC: &str = "messages.json";
const SESSION_DOC: &str = "session.json";
const JOURNAL_DOC: &str = "journal.json";
const DAILY_LOGS_DOC: &str = "daily_logs.json";
const SCHEDULE_DOC: &str = "schedule.json";

/// JSON-documents-on-disk backend for every store trait. One file per
/// document, read whole and written whole; concurrent writers are
/// last-writer-wins by design.
pub struct FilesystemStore {
    root: PathBuf,
    listeners: ListenerMap,
    next_listener_id: AtomicU64,
}

impl FilesystemStore {
    /// Open the store at `data_dir`, falling back to the platform data
    /// directory.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let root = data_dir.or_else(default_data_dir).ok_or_else(|| {
            CareloopError::ConfigError(
                "could not resolve a data directory; set CARE_DATA_DIR".to_string(),
            )
        })?;
        Ok(Self::with_root(root))
    }

    /// Open the store rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            listeners: Arc::new(Mutex::new(HashMap::new())),
            next_listener_id: AtomicU64::new(0),
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn doc_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Missing documents read as their default; a present but unreadable
    /// document is an error, never silently reset.
    fn read_doc<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.doc_path(name);
        if !path.exists() {
            return Ok(T::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_doc<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let contents = serde_json::to_string_pretty(value)?;
        fs::write(self.doc_path(name), contents)?;
        Ok(())
    }

    fn notify_listeners(&self, message: &Message) {
        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.values() {
            listener(message);
        }
    }
}

impl ProfileStore for FilesystemStore {
    fn load_profile(&self) -> Result<CareProfile> {
        self.read_doc(PROFILE_DOC)
    }

    fn save_profile(&self, profile: &CareProfile) -> Result<()> {
        self.write_doc(PROFILE_DOC, profile)
    }
}

impl MessageLog for FilesystemStore {
    fn append_message(&self, message: &Message) -> Result<Message> {
        let mut messages: Vec<Message> = self.read_doc(MESSAGES_DOC)?;
        let mut durable = message.clone();
        durable.stored_at = Some(Local::now());
        messages.push(durable.clone());
        self.write_doc(MESSAGES_DOC, &messages)?;
        self.notify_listeners(&durable);
        Ok(durable)
    }

    fn recent_messages(&self, limit: usize) -> Result<Vec<Message>> {
        let messages: Vec<Message> = self.read_doc(MESSAGES_DOC)?;
        let start = messages.len().saturating_sub(limit);
        Ok(messages[start..].to_vec())
    }

    fn clear_messages(&self) -> Result<()> {
        self.write_doc(MESSAGES_DOC, &Vec::<Message>::new())
    }

    fn subscribe(&self, listener: MessageListener) -> Subscription {
        let id = self.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, listener);
        Subscription::new(id, Arc::clone(&self.listeners))
    }
}

impl SessionStore for FilesystemStore {
    fn load_marker(&self) -> Result<SessionMarker> {
        self.read_doc(SESSION_DOC)
    }

    fn save_marker(&self, marker: &SessionMarker) -> Result<()> {
        self.write_doc(SESSION_DOC, marker)
    }
}

impl JournalStore for FilesystemStore {
    fn append_entry(&self, entry: &JournalEntry) -> Result<()> {
        let mut entries: Vec<JournalEntry> = self.read_doc(JOURNAL_DOC)?;
        entries.push(entry.clone());
        self.write_doc(JOURNAL_DOC, &entries)
    }

    fn journal_entries(&self) -> Result<Vec<JournalEntry>> {
        let mut entries: Vec<JournalEntry> = self.read_doc(JOURNAL_DOC)?;
        entries.reverse();
        Ok(entries)
    }

    fn update_entry_note(&self, id: Uuid, note: &str) -> Result<()> {
        let mut entries: Vec<JournalEntry> = self.read_doc(JOURNAL_DOC)?;
        let entry = entries.iter_mut().find(|e| e.id == id).ok_or_else(|| {
            CareloopError::StoreError(format!("no journal entry with id {}", id))
        })?;
        entry.user_notes = note.to_string();
        self.write_doc(JOURNAL_DOC, &entries)
    }
}

impl TrackerStore for FilesystemStore {
    fn append_daily_log(&self, log: &DailyLog) -> Result<()> {
        let mut logs: Vec<DailyLog> = self.read_doc(DAILY_LOGS_DOC)?;
        logs.push(log.clone());
        self.write_doc(DAILY_LOGS_DOC, &logs)
    }

    fn recent_daily_logs(&self, limit: usize) -> Result<Vec<DailyLog>> {
        let mut logs: Vec<DailyLog> = self.read_doc(DAILY_LOGS_DOC)?;
        logs.reverse();
        logs.truncate(limit);
        Ok(logs)
    }
}

impl ScheduleStore for FilesystemStore {
    fn load_schedule(&self) -> Result<Schedule> {
        self.read_doc(SCHEDULE_DOC)
    }

    fn save_schedule(&self, schedule: &Schedule) -> Result<()> {
        self.write_doc(SCHEDULE_DOC, schedule)
    }
}
