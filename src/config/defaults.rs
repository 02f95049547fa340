use std::path::PathBuf;

pub const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Where documents live unless `CARE_DATA_DIR` or `store.data_dir` says
/// otherwise.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("careloop"))
}
