//! Persisted per-user greeting state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::order::GreetingSlots;

/// Name and city a user has told the assistant, persisted per user.
///
/// Writes are last-write-wins with no confirmation step: whenever a turn
/// recognizes a name or city entity, the stored value is overwritten. This
/// is documented policy, not an oversight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GreetingState {
    pub name: Option<String>,
    pub city: Option<String>,
    /// Instant of the most recent slot write.
    pub updated_at: Option<DateTime<Utc>>,
}

impl GreetingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites stored slots with any recognized this turn.
    ///
    /// Returns true when a slot was written.
    pub fn apply(&mut self, slots: &GreetingSlots) -> bool {
        if slots.is_empty() {
            return false;
        }
        if let Some(name) = &slots.name {
            self.name = Some(name.clone());
        }
        if let Some(city) = &slots.city {
            self.city = Some(city.clone());
        }
        self.updated_at = Some(Utc::now());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(name: Option<&str>, city: Option<&str>) -> GreetingSlots {
        GreetingSlots {
            name: name.map(String::from),
            city: city.map(String::from),
        }
    }

    #[test]
    fn test_apply_writes_recognized_slots() {
        let mut state = GreetingState::new();

        let changed = state.apply(&slots(Some("Claire"), None));

        assert!(changed);
        assert_eq!(state.name.as_deref(), Some("Claire"));
        assert_eq!(state.city, None);
        assert!(state.updated_at.is_some());
    }

    #[test]
    fn test_apply_overwrites_previous_value() {
        let mut state = GreetingState::new();
        state.apply(&slots(Some("Claire"), Some("Seoul")));

        state.apply(&slots(Some("Dana"), None));

        assert_eq!(state.name.as_deref(), Some("Dana"));
        // Untouched slot survives the overwrite.
        assert_eq!(state.city.as_deref(), Some("Seoul"));
    }

    #[test]
    fn test_apply_empty_slots_is_noop() {
        let mut state = GreetingState::new();

        let changed = state.apply(&GreetingSlots::default());

        assert!(!changed);
        assert_eq!(state, GreetingState::new());
    }

    #[test]
    fn test_greeting_state_serde_round_trip() {
        let mut state = GreetingState::new();
        state.apply(&slots(Some("지민"), Some("부산")));

        let json = serde_json::to_string(&state).unwrap();
        let restored: GreetingState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, state);
    }
}
