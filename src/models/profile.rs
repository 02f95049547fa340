use serde::{Deserialize, Serialize};

/// The care profile describes the person being cared for. Every field is
/// free text and optional; an empty string means the caregiver has not
/// filled it in yet. Fallback wording for missing fields lives in the
/// prompt builder, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CareProfile {
    pub caregiver_name: String,
    pub recipient_name: String,
    pub age: String,
    pub diagnosis: String,
    pub communication_style: String,
    pub sensory_sensitivities: String,
    pub special_interests: String,
    pub triggers: String,
    pub calming_strategies: String,
    pub strengths: String,
    pub energy_level: String,
    pub current_challenge: String,
}

impl CareProfile {
    pub const FIELDS: &'static [&'static str] = &[
        "caregiver-name",
        "recipient-name",
        "age",
        "diagnosis",
        "communication-style",
        "sensory-sensitivities",
        "special-interests",
        "triggers",
        "calming-strategies",
        "strengths",
        "energy-level",
        "current-challenge",
    ];

    /// Set a field by its CLI name. Returns false for an unknown name.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "caregiver-name" => &mut self.caregiver_name,
            "recipient-name" => &mut self.recipient_name,
            "age" => &mut self.age,
            "diagnosis" => &mut self.diagnosis,
            "communication-style" => &mut self.communication_style,
            "sensory-sensitivities" => &mut self.sensory_sensitivities,
            "special-interests" => &mut self.special_interests,
            "triggers" => &mut self.triggers,
            "calming-strategies" => &mut self.calming_strategies,
            "strengths" => &mut self.strengths,
            "energy-level" => &mut self.energy_level,
            "current-challenge" => &mut self.current_challenge,
            _ => return false,
        };
        *slot = value.trim().to_string();
        true
    }

    /// Field name/value pairs in display order.
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("caregiver-name", self.caregiver_name.as_str()),
            ("recipient-name", self.recipient_name.as_str()),
            ("age", self.age.as_str()),
            ("diagnosis", self.diagnosis.as_str()),
            ("communication-style", self.communication_style.as_str()),
            ("sensory-sensitivities", self.sensory_sensitivities.as_str()),
            ("special-interests", self.special_interests.as_str()),
            ("triggers", self.triggers.as_str()),
            ("calming-strategies", self.calming_strategies.as_str()),
            ("strengths", self.strengths.as_str()),
            ("energy-level", self.energy_level.as_str()),
            ("current-challenge", self.current_challenge.as_str()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.trim().is_empty())
    }
}
