use careloop::models::{
    find_activity, CareProfile, DailyLog, Day, Factor, JournalEntry, Message, Mood, Schedule,
    SessionMarker,
};
use careloop::store::{
    FilesystemStore, JournalStore, MessageLog, ProfileStore, ScheduleStore, SessionStore,
    TrackerStore,
};
use chrono::{Duration, Local};
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use uuid::Uuid;

fn open_store() -> (TempDir, FilesystemStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = FilesystemStore::with_root(temp_dir.path());
    (temp_dir, store)
}

#[test]
fn test_missing_documents_read_as_defaults() {
    let (_dir, store) = open_store();
    assert!(store.load_profile().unwrap().is_empty());
    assert!(store.recent_messages(10).unwrap().is_empty());
    assert!(store.load_marker().unwrap().active_session_id.is_none());
    assert!(store.journal_entries().unwrap().is_empty());
    assert!(store.recent_daily_logs(10).unwrap().is_empty());
    assert!(store.load_schedule().unwrap().today.is_empty());
}

#[test]
fn test_corrupt_document_is_an_error_not_a_reset() {
    let (dir, store) = open_store();
    fs::write(dir.path().join("profile.json"), "{not json").unwrap();
    assert!(store.load_profile().is_err());
}

#[test]
fn test_profile_roundtrip() {
    let (_dir, store) = open_store();
    let mut profile = CareProfile::default();
    profile.set_field("caregiver-name", "Ana");
    profile.set_field("diagnosis", "Autism spectrum, level 2");
    store.save_profile(&profile).unwrap();
    assert_eq!(store.load_profile().unwrap(), profile);
}

#[test]
fn test_append_assigns_storage_timestamp() {
    let (_dir, store) = open_store();
    let pending = Message::user("first", 1_000);
    assert!(pending.is_pending());

    let durable = store.append_message(&pending).unwrap();
    assert_eq!(durable.client_id, pending.client_id);
    assert!(!durable.is_pending());

    let read_back = store.recent_messages(10).unwrap();
    assert_eq!(read_back.len(), 1);
    assert_eq!(read_back[0].content, "first");
    assert!(read_back[0].stored_at.is_some());
}

#[test]
fn test_recent_messages_windows_from_the_tail() {
    let (_dir, store) = open_store();
    for i in 0..5 {
        store.append_message(&Message::user(format!("m{i}"), i)).unwrap();
    }
    let recent = store.recent_messages(2).unwrap();
    assert_eq!(recent.len(), 2);
    // oldest first
    assert_eq!(recent[0].content, "m3");
    assert_eq!(recent[1].content, "m4");
}

#[test]
fn test_clear_messages_empties_the_log() {
    let (_dir, store) = open_store();
    store.append_message(&Message::user("one", 1)).unwrap();
    store.append_message(&Message::assistant("two", 2)).unwrap();
    store.clear_messages().unwrap();
    assert!(store.recent_messages(10).unwrap().is_empty());
}

#[test]
fn test_subscription_observes_appends_until_dropped() {
    let (_dir, store) = open_store();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = store.subscribe(Box::new(move |m| {
        sink.lock().unwrap().push(m.content.clone());
    }));

    store.append_message(&Message::user("one", 1)).unwrap();
    drop(subscription);
    store.append_message(&Message::user("two", 2)).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec!["one".to_string()]);
}

#[test]
fn test_marker_roundtrip() {
    let (_dir, store) = open_store();
    let marker = SessionMarker {
        active_session_id: Some("session-42".to_string()),
        last_interaction_at: Some(Local::now()),
    };
    store.save_marker(&marker).unwrap();
    let loaded = store.load_marker().unwrap();
    assert_eq!(loaded.active_session_id.as_deref(), Some("session-42"));
    assert!(loaded.last_interaction_at.is_some());
}

#[test]
fn test_journal_lists_newest_first() {
    let (_dir, store) = open_store();
    let now = Local::now();
    store
        .append_entry(&JournalEntry::milestone("First", "FAMILY: a", None, now))
        .unwrap();
    store
        .append_entry(&JournalEntry::milestone("Second", "FAMILY: b", None, now))
        .unwrap();

    let entries = store.journal_entries().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].title, "Second");
    assert_eq!(entries[1].title, "First");
}

#[test]
fn test_update_entry_note() {
    let (_dir, store) = open_store();
    let entry = JournalEntry::milestone("Win", "FAMILY: we did it", None, Local::now());
    store.append_entry(&entry).unwrap();

    store
        .update_entry_note(entry.id, "follow up with school")
        .unwrap();

    let entries = store.journal_entries().unwrap();
    assert_eq!(entries[0].user_notes, "follow up with school");
    assert_eq!(entries[0].summary, "FAMILY: we did it");
}

#[test]
fn test_update_note_for_missing_entry_fails() {
    let (_dir, store) = open_store();
    assert!(store.update_entry_note(Uuid::new_v4(), "note").is_err());
}

#[test]
fn test_daily_logs_newest_first_and_capped() {
    let (_dir, store) = open_store();
    let now = Local::now();
    for i in 0..4i64 {
        let mood = if i % 2 == 0 { Mood::Good } else { Mood::Hard };
        store
            .append_daily_log(&DailyLog::new(
                mood,
                Some(Factor::Sleep),
                now + Duration::minutes(i),
            ))
            .unwrap();
    }

    let logs = store.recent_daily_logs(2).unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].mood, Mood::Hard);
    assert_eq!(logs[1].mood, Mood::Good);
}

#[test]
fn test_schedule_roundtrip() {
    let (_dir, store) = open_store();
    let mut schedule = Schedule::default();
    schedule.add(find_activity("breakfast").unwrap(), Day::Today, Local::now());
    store.save_schedule(&schedule).unwrap();

    let loaded = store.load_schedule().unwrap();
    assert_eq!(loaded.today.len(), 1);
    assert_eq!(loaded.today[0].activity, "breakfast");
    assert!(loaded.updated_at.is_some());
}
