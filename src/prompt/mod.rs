mod builder;
mod topics;

pub use builder::{build_prompt, temporal_hint, DEFAULT_HISTORY_WINDOW, NO_HISTORY_MARKER};
pub use topics::{find_topic, Topic, QUICK_TOPICS};
