use chrono::{DateTime, Duration, Local};

use crate::models::SessionMarker;

/// Idle gap after which a returning caregiver is offered the choice to
/// continue the previous thread or start fresh. Fixed policy, not
/// user-configurable.
pub const RESUME_THRESHOLD_HOURS: i64 = 12;

/// Pure continuity state machine. Callers load the persisted marker, run
/// the transitions, and persist the marker back; nothing here performs
/// I/O or can fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContinuityState {
    pub active_session_id: Option<String>,
    pub last_interaction_at: Option<DateTime<Local>>,
    pub resume_prompt_visible: bool,
}

impl ContinuityState {
    pub fn from_marker(marker: &SessionMarker) -> Self {
        Self {
            active_session_id: marker.active_session_id.clone(),
            last_interaction_at: marker.last_interaction_at,
            resume_prompt_visible: false,
        }
    }

    pub fn to_marker(&self) -> SessionMarker {
        SessionMarker {
            active_session_id: self.active_session_id.clone(),
            last_interaction_at: self.last_interaction_at,
        }
    }

    /// Recompute the resume prompt from the idle gap. Idempotent; a
    /// never-interacted state (no timestamp) never prompts, and an idle
    /// gap of exactly the threshold does not prompt (strict `>`).
    pub fn on_load(&mut self, now: DateTime<Local>) {
        self.resume_prompt_visible = match self.last_interaction_at {
            Some(last) => now - last > Duration::hours(RESUME_THRESHOLD_HOURS),
            None => false,
        };
    }

    /// Keep the current thread. One-shot suppression: the timestamp is
    /// untouched, so the next load re-evaluates the same rule.
    pub fn choose_continue(&mut self) {
        self.resume_prompt_visible = false;
    }

    /// Start a fresh thread: mint a new session id and hide the prompt.
    /// The stored log is untouched; clearing the visible transcript is
    /// the caller's concern.
    pub fn choose_start_new(&mut self, now: DateTime<Local>) -> String {
        let id = SessionMarker::mint_session_id(now);
        self.active_session_id = Some(id.clone());
        self.resume_prompt_visible = false;
        id
    }

    /// Record a completed message exchange, minting a session id if none
    /// exists yet.
    pub fn record_exchange(&mut self, now: DateTime<Local>) {
        self.last_interaction_at = Some(now);
        if self.active_session_id.is_none() {
            self.active_session_id = Some(SessionMarker::mint_session_id(now));
        }
    }
}
