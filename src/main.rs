use clap::Parser;
use colored::*;
use std::process;

use careloop::chat::{self, ChatContext};
use careloop::cli::{Args, Command, JournalAction, ProfileAction, ScheduleAction};
use careloop::config::Config;
use careloop::error::{CareloopError, Result};
use careloop::models::{
    find_activity, milestone_summary, CareProfile, DailyLog, Day, Factor, JournalEntry,
    Mood, Schedule, MILESTONE_EXCERPT_LEN, ACTIVITIES,
};
use careloop::prompt::{find_topic, QUICK_TOPICS};
use careloop::report::{generate_report, REPORT_ENTRY_CAP, REPORT_LOG_CAP};
use careloop::store::{
    FilesystemStore, JournalStore, MessageLog, ProfileStore, ScheduleStore, SessionStore,
    TrackerStore,
};
use careloop::ui::render_rich;
use chrono::Local;
use uuid::Uuid;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match Config::from_env_and_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let store = match FilesystemStore::new(config.data_dir.clone()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    if config.verbose {
        eprintln!(
            "{}",
            format!("[care] Data directory: {}", store.root().display()).dimmed()
        );
    }

    if let Err(e) = run(args, &config, &store).await {
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}

async fn run(args: Args, config: &Config, store: &FilesystemStore) -> Result<()> {
    match args.command {
        Some(Command::Profile { action }) => profile_command(store, action),
        Some(Command::Journal { action }) => journal_command(store, action),
        Some(Command::Mood { mood, factor }) => mood_command(store, &mood, factor.as_deref()),
        Some(Command::Schedule { action }) => schedule_command(store, action),
        Some(Command::Report { days }) => report_command(config, store, days).await,
        Some(Command::Topics) => {
            topics_command();
            Ok(())
        }
        None => chat_command(args, config, store).await,
    }
}

async fn chat_command(args: Args, config: &Config, store: &FilesystemStore) -> Result<()> {
    if args.clear_history {
        store.clear_messages()?;
        println!("{}", "Conversation log cleared.".green());
        return Ok(());
    }

    let topic = match &args.topic {
        Some(id) => Some(find_topic(id).ok_or_else(|| {
            CareloopError::ConfigError(format!(
                "unknown topic '{}' (valid: {})",
                id,
                QUICK_TOPICS
                    .iter()
                    .map(|t| t.id)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?),
        None => None,
    };

    // A declared topic with no message sends the topic's own suggestion,
    // like tapping a quick-reply chip.
    let mut message = args.message.join(" ");
    if message.trim().is_empty() {
        if let Some(topic) = topic {
            message = topic.suggestion.to_string();
        }
    }
    if message.trim().is_empty() {
        print_usage();
        process::exit(1);
    }

    let context = ChatContext {
        config,
        store,
        start_new: args.new_session,
        force_continue: args.force_continue,
        topic,
    };
    chat::run_chat_turn(&context, &message).await
}

fn profile_command(store: &FilesystemStore, action: Option<ProfileAction>) -> Result<()> {
    match action.unwrap_or(ProfileAction::Show) {
        ProfileAction::Show => {
            let profile = store.load_profile()?;
            if profile.is_empty() {
                println!(
                    "{}",
                    "No profile saved yet. Set fields with `care profile set <field> <value>`."
                        .dimmed()
                );
            }
            for (name, value) in profile.fields() {
                if value.trim().is_empty() {
                    println!("{:>22}  {}", name.cyan(), "-".dimmed());
                } else {
                    println!("{:>22}  {}", name.cyan(), value);
                }
            }
            Ok(())
        }
        ProfileAction::Set { field, value } => {
            let mut profile = store.load_profile()?;
            if !profile.set_field(&field, &value.join(" ")) {
                return Err(CareloopError::ConfigError(format!(
                    "unknown profile field '{}' (valid: {})",
                    field,
                    CareProfile::FIELDS.join(", ")
                )));
            }
            store.save_profile(&profile)?;
            println!("{}", "Profile saved.".green());
            Ok(())
        }
    }
}

fn journal_command(store: &FilesystemStore, action: Option<JournalAction>) -> Result<()> {
    match action.unwrap_or(JournalAction::List) {
        JournalAction::List => {
            let entries = store.journal_entries()?;
            if entries.is_empty() {
                println!("{}", "No milestones saved yet.".dimmed());
                return Ok(());
            }
            for entry in entries {
                println!(
                    "{}  {}  {}",
                    entry.created_at.format("%Y-%m-%d %H:%M"),
                    entry.title.bold(),
                    format!("({})", entry.id).dimmed()
                );
                for line in entry.summary.lines() {
                    println!("  {}", line);
                }
                if !entry.user_notes.is_empty() {
                    println!("  {}", format!("note: {}", entry.user_notes).italic());
                }
                println!();
            }
            Ok(())
        }
        JournalAction::Save { title } => {
            let recent = store.recent_messages(MILESTONE_EXCERPT_LEN)?;
            if recent.is_empty() {
                println!("{}", "Nothing to capture yet.".dimmed());
                return Ok(());
            }
            let marker = store.load_marker()?;
            let entry = JournalEntry::milestone(
                title.unwrap_or_else(|| "Milestone".to_string()),
                milestone_summary(&recent),
                marker.active_session_id,
                Local::now(),
            );
            store.append_entry(&entry)?;
            println!("{}", "Milestone saved to the journal.".green());
            Ok(())
        }
        JournalAction::Note { id, text } => {
            let id = Uuid::parse_str(&id).map_err(|_| {
                CareloopError::ConfigError(format!("'{}' is not a milestone id", id))
            })?;
            store.update_entry_note(id, &text.join(" "))?;
            println!("{}", "Note saved.".green());
            Ok(())
        }
    }
}

fn mood_command(store: &FilesystemStore, mood: &str, factor: Option<&str>) -> Result<()> {
    let mood = Mood::parse(mood).ok_or_else(|| {
        CareloopError::ConfigError(format!("unknown mood '{}' (good, okay or hard)", mood))
    })?;
    let factor = match factor {
        Some(f) => Some(Factor::parse(f).ok_or_else(|| {
            CareloopError::ConfigError(format!(
                "unknown factor '{}' (sleep, food, sensory, routine, health or other)",
                f
            ))
        })?),
        None => None,
    };

    let log = DailyLog::new(mood, factor, Local::now());
    store.append_daily_log(&log)?;
    println!("{}", format!("Logged a {} day.", log.mood.label()).green());
    Ok(())
}

fn schedule_command(store: &FilesystemStore, action: Option<ScheduleAction>) -> Result<()> {
    let mut schedule = store.load_schedule()?;
    let now = Local::now();

    // Rollover happens on every load, before any edit is applied.
    if schedule.apply_rollover(now) {
        store.save_schedule(&schedule)?;
        println!("{}", "A new day: tomorrow's plan is now today's.".dimmed());
    }

    match action.unwrap_or(ScheduleAction::Show) {
        ScheduleAction::Show => {
            print_schedule(&schedule);
            Ok(())
        }
        ScheduleAction::Add { activity, tomorrow } => {
            let activity = find_activity(&activity).ok_or_else(|| {
                CareloopError::ConfigError(format!(
                    "unknown activity '{}' (valid: {})",
                    activity,
                    ACTIVITIES
                        .iter()
                        .map(|a| a.id)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })?;
            let day = day_of(tomorrow);
            schedule.add(activity, day, now);
            store.save_schedule(&schedule)?;
            println!(
                "{}",
                format!("Added {} to {}.", activity.label, day.label()).green()
            );
            Ok(())
        }
        ScheduleAction::Done { index, tomorrow } => {
            let day = day_of(tomorrow);
            match schedule.toggle(day, display_index(index)?, now) {
                Some(done) => {
                    store.save_schedule(&schedule)?;
                    if done {
                        println!("{}", format!("Item {} marked done.", index).green());
                    } else {
                        println!("{}", format!("Item {} marked not done.", index).green());
                    }
                    Ok(())
                }
                None => Err(no_such_item(index, day)),
            }
        }
        ScheduleAction::Remove { index, tomorrow } => {
            let day = day_of(tomorrow);
            match schedule.remove(day, display_index(index)?, now) {
                Some(removed) => {
                    store.save_schedule(&schedule)?;
                    println!("{}", format!("Removed {}.", removed.label).green());
                    Ok(())
                }
                None => Err(no_such_item(index, day)),
            }
        }
        ScheduleAction::Move {
            index,
            up,
            down,
            tomorrow,
        } => {
            if !up && !down {
                return Err(CareloopError::ConfigError(
                    "specify --up or --down".to_string(),
                ));
            }
            let day = day_of(tomorrow);
            if schedule.shift(day, display_index(index)?, up, now) {
                store.save_schedule(&schedule)?;
                println!("{}", format!("Item {} moved.", index).green());
                Ok(())
            } else {
                Err(no_such_item(index, day))
            }
        }
    }
}

async fn report_command(config: &Config, store: &FilesystemStore, days: i64) -> Result<()> {
    let profile = store.load_profile()?;
    let logs = store.recent_daily_logs(REPORT_LOG_CAP)?;
    let entries: Vec<_> = store
        .journal_entries()?
        .into_iter()
        .take(REPORT_ENTRY_CAP)
        .collect();

    if config.verbose {
        eprintln!(
            "{}",
            format!(
                "[care] Report material: {} daily logs, {} milestones",
                logs.len(),
                entries.len()
            )
            .dimmed()
        );
    }

    let report = generate_report(config, &profile, &logs, &entries, days).await?;
    println!("{}", render_rich(&report));
    Ok(())
}

fn topics_command() {
    for topic in QUICK_TOPICS {
        println!(
            "{:>8}  {}  {}",
            topic.id.cyan(),
            topic.label.bold(),
            format!("\"{}\"", topic.suggestion).dimmed()
        );
    }
}

fn print_schedule(schedule: &Schedule) {
    for day in [Day::Today, Day::Tomorrow] {
        let heading = match day {
            Day::Today => "Today".blue().bold(),
            Day::Tomorrow => "Tomorrow".magenta().bold(),
        };
        println!("{}", heading);
        let items = schedule.items(day);
        if items.is_empty() {
            println!("  {}", "(nothing planned)".dimmed());
        }
        for (i, item) in items.iter().enumerate() {
            let tick = if item.completed {
                "[x]".green().to_string()
            } else {
                "[ ]".to_string()
            };
            println!("  {}. {} {}", i + 1, tick, item.label);
        }
    }
    println!(
        "{}",
        format!(
            "Activities: {}",
            ACTIVITIES
                .iter()
                .map(|a| a.id)
                .collect::<Vec<_>>()
                .join(", ")
        )
        .dimmed()
    );
}

fn day_of(tomorrow: bool) -> Day {
    if tomorrow {
        Day::Tomorrow
    } else {
        Day::Today
    }
}

/// Items are displayed 1-based.
fn display_index(index: usize) -> Result<usize> {
    index
        .checked_sub(1)
        .ok_or_else(|| CareloopError::ConfigError("item numbers start at 1".to_string()))
}

fn no_such_item(index: usize, day: Day) -> CareloopError {
    CareloopError::ConfigError(format!("no item {} on {}'s list", index, day.label()))
}

fn print_usage() {
    eprintln!("{}", "Usage: care [OPTIONS] <message>...".red());
    eprintln!(
        "{}",
        "       care <profile|journal|mood|schedule|report|topics> ...".red()
    );
    eprintln!(
        "{}",
        "  -n, --new                  Start a new conversation thread".dimmed()
    );
    eprintln!(
        "{}",
        "  -c, --continue             Continue the previous thread without being asked".dimmed()
    );
    eprintln!(
        "{}",
        "  -t, --topic <id>           Declare a quick topic (sleep, crisis, school, vent)".dimmed()
    );
    eprintln!(
        "{}",
        "      --clear                Clear the stored conversation log".dimmed()
    );
    eprintln!("{}", "Run `care --help` for the full command list.".dimmed());
}
