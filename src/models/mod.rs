mod journal;
mod marker;
mod message;
mod profile;
mod schedule;
mod tracker;

pub use journal::{milestone_summary, JournalEntry, MILESTONE_EXCERPT_LEN};
pub use marker::SessionMarker;
pub use message::{Message, Role};
pub use profile::CareProfile;
pub use schedule::{find_activity, Activity, Day, Schedule, ScheduleItem, ACTIVITIES};
pub use tracker::{DailyLog, Factor, Mood};
