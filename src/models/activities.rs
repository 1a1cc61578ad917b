use serde::{Deserialize, Serialize};

/// One extracurricular offering. The activity name is the directory key and is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    // Stored and reported, never checked on signup.
    pub max_participants: u32,
    // Signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }
}
