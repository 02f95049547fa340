use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Catalogue entry for a plannable activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub id: &'static str,
    pub label: &'static str,
}

/// The fixed activity catalogue, in display order.
pub const ACTIVITIES: &[Activity] = &[
    Activity { id: "wake", label: "Wake up" },
    Activity { id: "breakfast", label: "Breakfast" },
    Activity { id: "school", label: "School" },
    Activity { id: "lunch", label: "Lunch" },
    Activity { id: "homework", label: "Homework" },
    Activity { id: "play", label: "Play" },
    Activity { id: "screens", label: "Screen time" },
    Activity { id: "bath", label: "Bath" },
    Activity { id: "dinner", label: "Dinner" },
    Activity { id: "sleep", label: "Sleep" },
    Activity { id: "therapy", label: "Therapy" },
    Activity { id: "music", label: "Music" },
];

pub fn find_activity(id: &str) -> Option<&'static Activity> {
    ACTIVITIES.iter().find(|a| a.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Today,
    Tomorrow,
}

impl Day {
    pub fn parse(s: &str) -> Option<Day> {
        match s.to_lowercase().as_str() {
            "today" => Some(Day::Today),
            "tomorrow" => Some(Day::Tomorrow),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Today => "today",
            Day::Tomorrow => "tomorrow",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    /// Activity id from the catalogue.
    pub activity: String,
    pub label: String,
    #[serde(default)]
    pub completed: bool,
}

/// Two-day visual plan. `updated_at` carries the last edit so the nightly
/// rollover can tell whether a new local day has started.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schedule {
    pub today: Vec<ScheduleItem>,
    pub tomorrow: Vec<ScheduleItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Local>>,
}

impl Schedule {
    pub fn items(&self, day: Day) -> &[ScheduleItem] {
        match day {
            Day::Today => &self.today,
            Day::Tomorrow => &self.tomorrow,
        }
    }

    fn items_mut(&mut self, day: Day) -> &mut Vec<ScheduleItem> {
        match day {
            Day::Today => &mut self.today,
            Day::Tomorrow => &mut self.tomorrow,
        }
    }

    pub fn add(&mut self, activity: &Activity, day: Day, now: DateTime<Local>) {
        self.items_mut(day).push(ScheduleItem {
            id: now.timestamp_millis().to_string(),
            activity: activity.id.to_string(),
            label: activity.label.to_string(),
            completed: false,
        });
        self.updated_at = Some(now);
    }

    /// Flip completion on the item at `index`. Returns the new state, or
    /// `None` when the index is out of range.
    pub fn toggle(&mut self, day: Day, index: usize, now: DateTime<Local>) -> Option<bool> {
        let items = self.items_mut(day);
        let item = items.get_mut(index)?;
        item.completed = !item.completed;
        let state = item.completed;
        self.updated_at = Some(now);
        Some(state)
    }

    pub fn remove(&mut self, day: Day, index: usize, now: DateTime<Local>) -> Option<ScheduleItem> {
        let items = self.items_mut(day);
        if index >= items.len() {
            return None;
        }
        let removed = items.remove(index);
        self.updated_at = Some(now);
        Some(removed)
    }

    /// Swap the item at `index` with its neighbour above (`up`) or below.
    pub fn shift(&mut self, day: Day, index: usize, up: bool, now: DateTime<Local>) -> bool {
        let items = self.items_mut(day);
        let target = if up {
            match index.checked_sub(1) {
                Some(t) => t,
                None => return false,
            }
        } else {
            index + 1
        };
        if index >= items.len() || target >= items.len() {
            return false;
        }
        items.swap(index, target);
        self.updated_at = Some(now);
        true
    }

    /// Nightly rollover: once the local calendar day has changed since the
    /// last edit, tomorrow's plan (if any) becomes today's with completion
    /// cleared. A schedule that was never edited is left alone.
    pub fn apply_rollover(&mut self, now: DateTime<Local>) -> bool {
        let same_day = self
            .updated_at
            .map(|t| t.date_naive() == now.date_naive())
            .unwrap_or(true);
        if same_day || self.tomorrow.is_empty() {
            return false;
        }
        self.today = std::mem::take(&mut self.tomorrow);
        for item in &mut self.today {
            item.completed = false;
        }
        self.updated_at = Some(now);
        true
    }
}
