use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Local;
use colored::*;
use serde_json::Value;

use crate::api::{
    extract_proxy_result, extract_reply, request_generate, request_proxy, GenerateRequest,
};
use crate::config::Config;
use crate::continuity::ContinuityState;
use crate::error::{CareloopError, Result};
use crate::models::{Message, SessionMarker};
use crate::prompt::{build_prompt, Topic};
use crate::safety::is_safety_trigger;
use crate::store::{FilesystemStore, MessageLog, ProfileStore, SessionStore};
use crate::transcript::Transcript;
use crate::ui;

/// Shown when the visible conversation is empty. Ephemeral: printed, never
/// stored, never part of prompt history.
pub const GREETING: &str = "Hi, I'm your companion. I'm here to listen.";

/// Neutral assistant-style line shown when the generation path fails for
/// any reason. Printed, never persisted; the caregiver's own message stays
/// persisted regardless.
pub const CONNECTION_FALLBACK: &str =
    "I ran into a connection problem. I'm still right here with you.";

pub struct ChatContext<'a> {
    pub config: &'a Config,
    pub store: &'a FilesystemStore,
    /// `--new`: start a fresh thread without asking.
    pub start_new: bool,
    /// `--continue`: keep the previous thread without asking.
    pub force_continue: bool,
    pub topic: Option<&'static Topic>,
}

/// One full chat turn: continuity, safety gate, optimistic append,
/// prompt assembly, generation, reply persistence.
pub async fn run_chat_turn(context: &ChatContext<'_>, message_text: &str) -> Result<()> {
    let config = context.config;
    let store = context.store;

    // The safety gate comes before anything else touches disk: an
    // intercepted message leaves no trace and reaches no model.
    if is_safety_trigger(message_text) {
        ui::print_safety_alert();
        return Ok(());
    }

    let now = Local::now();
    let now_millis = now.timestamp_millis();

    let mut state = ContinuityState::from_marker(&store.load_marker()?);
    state.on_load(now);

    let start_fresh = resolve_resume_choice(&mut state, context.start_new, context.force_continue, now)?;

    if state.active_session_id.is_none() {
        state.active_session_id = Some(SessionMarker::mint_session_id(now));
    }

    // Starting fresh resets only the visible transcript; the stored log
    // keeps everything.
    let mut transcript = if start_fresh {
        Transcript::new()
    } else {
        Transcript::seed(store.recent_messages(config.history_window)?)
    };

    if transcript.is_empty() {
        println!("{}", GREETING.cyan());
    }

    // Elapsed time and prompt history are both taken before the outgoing
    // message enters the view.
    let hours_since_last = transcript.hours_since_last(now_millis);
    let history_snapshot = transcript.messages().to_vec();

    if config.verbose {
        eprintln!(
            "{}",
            format!(
                "[care] History window: {} of {} stored messages",
                history_snapshot.len(),
                config.history_window
            )
            .dimmed()
        );
        match hours_since_last {
            Some(h) => eprintln!("{}", format!("[care] Hours since last message: {:.2}", h).dimmed()),
            None => eprintln!("{}", "[care] No prior message timestamp".dimmed()),
        }
    }

    let pending = Message::user(message_text, now_millis)
        .with_session(state.active_session_id.clone());

    // Durable appends come back through the subscription; reconciling from
    // it keeps the optimistic entry from rendering twice.
    let arrivals: Arc<Mutex<Vec<Message>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&arrivals);
    let _subscription = store.subscribe(Box::new(move |message| {
        sink.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());
    }));

    transcript.append_pending(pending.clone());

    // A failed write is logged and the optimistic entry stays visible.
    match store.append_message(&pending) {
        Ok(_) => drain_arrivals(&arrivals, &mut transcript),
        Err(e) => ui::print_error(&format!("could not persist your message: {}", e)),
    }

    state.record_exchange(now);
    if let Err(e) = store.save_marker(&state.to_marker()) {
        ui::print_error(&format!("could not update session marker: {}", e));
    }

    let profile = store.load_profile()?;
    let prompt = build_prompt(
        message_text,
        &profile,
        &history_snapshot,
        hours_since_last,
        context.topic.map(|t| t.label),
        config.history_window,
    );

    if config.verbose {
        eprintln!("{}", format!("[care] Using model: {}", config.model).dimmed());
        eprintln!(
            "{}",
            format!(
                "[care] Transport: {}",
                if config.proxy_url.is_some() { "proxy" } else { "direct" }
            )
            .dimmed()
        );
        eprintln!("{}", format!("[care] Prompt length: {} chars", prompt.len()).dimmed());
    }

    match generate_text(config, &prompt).await {
        Ok(reply) => {
            ui::print_reply(&reply);

            let assistant = Message::assistant(reply, Local::now().timestamp_millis())
                .with_session(state.active_session_id.clone());
            match store.append_message(&assistant) {
                Ok(_) => drain_arrivals(&arrivals, &mut transcript),
                Err(e) => ui::print_error(&format!("could not persist the reply: {}", e)),
            }

            let now = Local::now();
            state.record_exchange(now);
            if let Err(e) = store.save_marker(&state.to_marker()) {
                ui::print_error(&format!("could not update session marker: {}", e));
            }
        }
        Err(e) => {
            // Recovered locally: diagnostic to stderr, neutral line to the
            // caregiver, nothing persisted for the assistant side.
            ui::print_error(&e.to_string());
            ui::print_reply(CONNECTION_FALLBACK);
        }
    }

    Ok(())
}

/// Apply the resume choice for this load. Returns true when the visible
/// transcript should reset to the greeting.
fn resolve_resume_choice(
    state: &mut ContinuityState,
    start_new: bool,
    force_continue: bool,
    now: chrono::DateTime<Local>,
) -> Result<bool> {
    if start_new {
        state.choose_start_new(now);
        return Ok(true);
    }
    if force_continue {
        state.choose_continue();
        return Ok(false);
    }
    if !state.resume_prompt_visible {
        return Ok(false);
    }

    println!(
        "{}",
        "It has been a while since your last conversation.".cyan()
    );
    print!(
        "{}",
        "Press Enter to continue it, or type 'n' to start fresh: ".cyan()
    );
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    match line.trim().to_lowercase().as_str() {
        "n" | "new" => {
            state.choose_start_new(now);
            Ok(true)
        }
        _ => {
            state.choose_continue();
            Ok(false)
        }
    }
}

fn drain_arrivals(arrivals: &Arc<Mutex<Vec<Message>>>, transcript: &mut Transcript) {
    let mut received = arrivals.lock().unwrap_or_else(PoisonError::into_inner);
    for message in received.drain(..) {
        transcript.reconcile(message);
    }
}

/// Send a prompt through the configured transport and pull out the reply
/// text.
async fn generate_text(config: &Config, prompt: &str) -> Result<String> {
    let body = GenerateRequest::from_text(prompt);

    if let Some(proxy_url) = &config.proxy_url {
        let response = request_proxy(proxy_url, "chat", &body).await?;
        let status = response.status().as_u16();
        let json: Value = response.json().await?;
        return extract_proxy_result(status, &json);
    }

    let api_key = config.require_api_key()?;
    let response = request_generate(api_key, &config.api_endpoint, &config.model, &body).await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await?;
        return Err(CareloopError::ApiError { status, message });
    }

    let json: Value = response.json().await?;
    extract_reply(&json)
}
