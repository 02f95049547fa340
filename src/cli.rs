use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "care")]
#[command(about = "Companion chat and care tools for caregivers", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(short = 'n', long = "new", help = "Start a new conversation thread")]
    pub new_session: bool,

    #[arg(
        short = 'c',
        long = "continue",
        help = "Continue the previous thread without being asked"
    )]
    pub force_continue: bool,

    #[arg(long = "clear", help = "Clear the stored conversation log")]
    pub clear_history: bool,

    #[arg(
        short = 't',
        long = "topic",
        help = "Declare a quick topic (sleep, crisis, school, vent)"
    )]
    pub topic: Option<String>,

    #[arg(long = "model", help = "Override the generation model")]
    pub model: Option<String>,

    #[arg(
        long = "api-endpoint",
        help = "Custom API base URL for the direct generation path"
    )]
    pub api_endpoint: Option<String>,

    #[arg(help = "Message to send")]
    pub message: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or edit the care profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// List saved milestones or record a new one
    Journal {
        #[command(subcommand)]
        action: Option<JournalAction>,
    },
    /// Record a mood check-in for today
    Mood {
        #[arg(help = "How the day went: good, okay or hard")]
        mood: String,
        #[arg(
            long = "factor",
            help = "Main factor: sleep, food, sensory, routine, health or other"
        )]
        factor: Option<String>,
    },
    /// Show or edit the visual schedule
    Schedule {
        #[command(subcommand)]
        action: Option<ScheduleAction>,
    },
    /// Generate a clinical summary from recent logs and milestones
    Report {
        #[arg(
            long = "days",
            default_value_t = crate::report::DEFAULT_REPORT_DAYS,
            help = "Period to analyze: 7, 15, 30 or 60 days"
        )]
        days: i64,
    },
    /// List the quick topics
    Topics,
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Print every profile field
    Show,
    /// Set one profile field
    Set {
        #[arg(help = "Field name, e.g. recipient-name")]
        field: String,
        #[arg(help = "New value")]
        value: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum JournalAction {
    /// List saved milestones, newest first
    List,
    /// Capture the recent conversation as a milestone
    Save {
        #[arg(long = "title", help = "Title for the milestone")]
        title: Option<String>,
    },
    /// Attach or replace the personal note on a milestone
    Note {
        #[arg(help = "Milestone id")]
        id: String,
        #[arg(help = "Note text")]
        text: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ScheduleAction {
    /// Print both days of the schedule
    Show,
    /// Add an activity
    Add {
        #[arg(help = "Activity id, e.g. breakfast (see `care schedule show`)")]
        activity: String,
        #[arg(long = "tomorrow", help = "Add to tomorrow instead of today")]
        tomorrow: bool,
    },
    /// Toggle completion on an item
    Done {
        #[arg(help = "Item number as shown")]
        index: usize,
        #[arg(long = "tomorrow", help = "Address tomorrow's list")]
        tomorrow: bool,
    },
    /// Remove an item
    Remove {
        #[arg(help = "Item number as shown")]
        index: usize,
        #[arg(long = "tomorrow", help = "Address tomorrow's list")]
        tomorrow: bool,
    },
    /// Move an item up or down
    Move {
        #[arg(help = "Item number as shown")]
        index: usize,
        #[arg(long = "up", conflicts_with = "down", help = "Move one position earlier")]
        up: bool,
        #[arg(long = "down", help = "Move one position later")]
        down: bool,
        #[arg(long = "tomorrow", help = "Address tomorrow's list")]
        tomorrow: bool,
    },
}
