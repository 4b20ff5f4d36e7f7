//! Presenter abstraction trait

use crate::types::NavigationEvent;

/// Receiver of navigation updates.
///
/// Owns every display concern (score indicator, date formatting, layout).
/// Called synchronously from the controller, so implementations should hand
/// the event off rather than block.
///
/// Platform implementations:
/// - [`LoggingPresenter`]: writes each event to the `log` facade
pub trait Presenter: Send + Sync {
    fn on_state_changed(&self, event: &NavigationEvent);
}

/// Presenter that only logs
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPresenter;

impl Presenter for LoggingPresenter {
    fn on_state_changed(&self, event: &NavigationEvent) {
        match event {
            NavigationEvent::UsersLoaded { count } => log::info!("{count} users loaded"),
            NavigationEvent::MessageReady {
                user,
                message,
                counter,
                index,
                total,
            } => log::info!(
                "User {} message {}/{total} (score {:.2}, {} matches in total)",
                user.id,
                index + 1,
                message.rounded_score(),
                counter.total_count
            ),
            NavigationEvent::MessageBoundaryReached { direction } => {
                log::debug!("Message boundary reached ({direction:?})");
            }
            NavigationEvent::UsersExhausted { direction } => {
                log::info!("No more users ({direction:?})");
            }
            NavigationEvent::FetchFailed { reason } => log::warn!("Fetch failed: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::types::Direction;

    #[test]
    fn logging_presenter_accepts_every_event() {
        let presenter: Arc<dyn Presenter> = Arc::new(LoggingPresenter);
        for event in [
            NavigationEvent::UsersLoaded { count: 3 },
            NavigationEvent::MessageBoundaryReached {
                direction: Direction::Next,
            },
            NavigationEvent::UsersExhausted {
                direction: Direction::Prev,
            },
            NavigationEvent::FetchFailed {
                reason: "timeout".to_string(),
            },
        ] {
            presenter.on_state_changed(&event);
        }
    }
}
