use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Good,
    Okay,
    Hard,
}

impl Mood {
    pub fn parse(s: &str) -> Option<Mood> {
        match s.to_lowercase().as_str() {
            "good" => Some(Mood::Good),
            "okay" | "ok" => Some(Mood::Okay),
            "hard" => Some(Mood::Hard),
            _ => None,
        }
    }

    /// Numeric weight used when a day is averaged for the clinical report.
    pub fn value(self) -> u8 {
        match self {
            Mood::Good => 3,
            Mood::Okay => 2,
            Mood::Hard => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Hard => "hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Sleep,
    Food,
    Sensory,
    Routine,
    Health,
    Other,
}

impl Factor {
    pub fn parse(s: &str) -> Option<Factor> {
        match s.to_lowercase().as_str() {
            "sleep" => Some(Factor::Sleep),
            "food" => Some(Factor::Food),
            "sensory" => Some(Factor::Sensory),
            "routine" => Some(Factor::Routine),
            "health" => Some(Factor::Health),
            "other" => Some(Factor::Other),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Factor::Sleep => "sleep",
            Factor::Food => "food",
            Factor::Sensory => "sensory",
            Factor::Routine => "routine",
            Factor::Health => "health",
            Factor::Other => "other",
        }
    }
}

/// One mood check-in. A day may hold several; the report averages them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub mood: Mood,
    /// Denormalized weight, stored so exports stay readable without code.
    pub mood_value: u8,
    #[serde(default)]
    pub factors: Vec<Factor>,
    pub created_at: DateTime<Local>,
    /// Local calendar day, `YYYY-MM-DD`.
    pub date: String,
}

impl DailyLog {
    pub fn new(mood: Mood, factor: Option<Factor>, now: DateTime<Local>) -> Self {
        Self {
            mood,
            mood_value: mood.value(),
            factors: factor.into_iter().collect(),
            created_at: now,
            date: now.format("%Y-%m-%d").to_string(),
        }
    }
}
