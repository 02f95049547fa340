/// A quick-reply topic: a short label the caregiver can declare to focus
/// the conversation, with a canned opening message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub label: &'static str,
    pub suggestion: &'static str,
}

pub const QUICK_TOPICS: &[Topic] = &[
    Topic {
        id: "sleep",
        label: "Sleep routines",
        suggestion: "I want to talk about my loved one's sleep routines.",
    },
    Topic {
        id: "crisis",
        label: "Crisis",
        suggestion: "I need ideas for handling meltdowns and dysregulation.",
    },
    Topic {
        id: "school",
        label: "School & social",
        suggestion: "I want to talk about school and social adjustment.",
    },
    Topic {
        id: "vent",
        label: "Venting",
        suggestion: "I just need to vent today. It has been an intense day.",
    },
];

pub fn find_topic(id: &str) -> Option<&'static Topic> {
    let id = id.to_lowercase();
    QUICK_TOPICS.iter().find(|t| t.id == id)
}
