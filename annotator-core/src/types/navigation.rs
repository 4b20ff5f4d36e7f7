//! Navigation state and presenter events

use serde::{Deserialize, Serialize};

use annotator_store::{AggregateCounter, MessageRecord, UserRecord};

/// Step direction along a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

impl Direction {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Next => Self::Prev,
            Self::Prev => Self::Next,
        }
    }
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationState {
    /// Nothing shown yet
    #[default]
    Idle,
    FetchingUsers,
    FetchingMessages,
    /// A message of the current user is selected
    Ready,
    /// No further user with messages in the last requested direction
    Exhausted,
}

/// Push-style update delivered to the presenter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum NavigationEvent {
    /// The users page arrived
    UsersLoaded { count: usize },

    /// A message is selected
    #[serde(rename_all = "camelCase")]
    MessageReady {
        user: UserRecord,
        message: MessageRecord,
        counter: AggregateCounter,
        /// Position of `message` in the user's list
        index: usize,
        /// Number of messages of `user`
        total: usize,
    },

    /// Message navigation hit the first or last message
    MessageBoundaryReached { direction: Direction },

    /// No user with messages remains in `direction`
    UsersExhausted { direction: Direction },

    /// A store fetch failed; the controller is back in its last stable state
    FetchFailed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions() {
        assert_eq!(Direction::Next.opposite(), Direction::Prev);
        assert_eq!(Direction::Prev.opposite(), Direction::Next);
    }

    #[test]
    fn event_wire_shape() {
        let json = serde_json::to_value(NavigationEvent::UsersExhausted {
            direction: Direction::Prev,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "usersExhausted", "data": {"direction": "prev"}})
        );

        let json = serde_json::to_value(NavigationEvent::FetchFailed {
            reason: "down".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "fetchFailed");
        assert_eq!(json["data"]["reason"], "down");
    }
}
