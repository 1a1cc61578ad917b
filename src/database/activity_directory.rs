use parking_lot::Mutex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

use crate::database::seed;
use crate::errors::SignupError;
use crate::models::Activity;

/// In-memory registry of activities keyed by name.
///
/// The set of names is fixed at construction; only rosters change afterwards.
/// Each activity has its own lock so the membership check and the roster
/// update of one enroll/withdraw call happen atomically.
#[derive(Debug)]
pub struct ActivityDirectory {
    order: Vec<String>,
    activities: HashMap<String, Mutex<Activity>>,
}

/// Point-in-time copy of the directory, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot(pub Vec<(String, Activity)>);

impl DirectorySnapshot {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// JSON object `name -> activity`, keys in catalog order.
impl Serialize for DirectorySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl ActivityDirectory {
    pub fn new(entries: impl IntoIterator<Item = (String, Activity)>) -> Self {
        let mut order = Vec::new();
        let mut activities = HashMap::new();
        for (name, activity) in entries {
            if activities.contains_key(&name) {
                tracing::warn!(activity = %name, "duplicate activity name ignored");
                continue;
            }
            order.push(name.clone());
            activities.insert(name, Mutex::new(activity));
        }
        Self { order, activities }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn list_activities(&self) -> DirectorySnapshot {
        let rows = self
            .order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|slot| (name.clone(), slot.lock().clone()))
            })
            .collect();
        DirectorySnapshot(rows)
    }

    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.activities
            .get(activity_name)
            .map(|slot| slot.lock().clone())
    }

    pub fn enroll(&self, activity_name: &str, participant: &str) -> Result<String, SignupError> {
        let slot = self
            .activities
            .get(activity_name)
            .ok_or(SignupError::NotFound)?;
        let mut activity = slot.lock();

        if activity.has_participant(participant) {
            return Err(SignupError::AlreadyRegistered);
        }

        // No capacity check against max_participants.
        activity.participants.push(participant.to_string());
        Ok(format!("Signed up {} for {}", participant, activity_name))
    }

    pub fn withdraw(&self, activity_name: &str, participant: &str) -> Result<String, SignupError> {
        let slot = self
            .activities
            .get(activity_name)
            .ok_or(SignupError::NotFound)?;
        let mut activity = slot.lock();

        let Some(idx) = activity.participants.iter().position(|p| p == participant) else {
            return Err(SignupError::NotRegistered);
        };

        activity.participants.remove(idx);
        Ok(format!("Unregistered {} from {}", participant, activity_name))
    }
}
