mod filesystem;
mod storage;

pub use filesystem::FilesystemStore;
pub use storage::{
    JournalStore, MessageListener, MessageLog, ProfileStore, ScheduleStore, SessionStore,
    Subscription, TrackerStore,
};
