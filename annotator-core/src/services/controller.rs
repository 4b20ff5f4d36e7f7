//! Navigation state machine
//!
//! The controller never performs I/O. Navigation methods return the
//! [`FetchRequest`] to run (if any); the driver runs it and hands the result
//! back through [`NavigationController::complete`], which may ask for another
//! fetch (for instance to skip a user with no messages).

use std::sync::Arc;

use annotator_store::AggregateCounter;

use crate::cursor::{MessageCursor, UserCursor};
use crate::traits::Presenter;
use crate::types::{
    Direction, FetchCompletion, FetchRequest, FetchTicket, MessageFetch, MessageRecord,
    NavigationEvent, NavigationState, UserRecord,
};

/// Owner of both cursors and the only writer of their positions
pub struct NavigationController {
    users: UserCursor,
    messages: MessageCursor,
    state: NavigationState,
    last_direction: Direction,
    /// Direction that produced the current `Exhausted` state
    exhausted: Option<Direction>,
    counter: Option<AggregateCounter>,
    /// User position of the last `Ready` state
    anchor: Option<usize>,
    users_loaded: bool,
    generation: u64,
    pending: Option<FetchRequest>,
    users_page_size: u32,
    presenter: Arc<dyn Presenter>,
}

impl NavigationController {
    pub fn new(presenter: Arc<dyn Presenter>, users_page_size: u32) -> Self {
        Self {
            users: UserCursor::new(),
            messages: MessageCursor::new(),
            state: NavigationState::Idle,
            last_direction: Direction::Next,
            exhausted: None,
            counter: None,
            anchor: None,
            users_loaded: false,
            generation: 0,
            pending: None,
            users_page_size,
            presenter,
        }
    }

    // ===== Accessors =====

    pub const fn state(&self) -> NavigationState {
        self.state
    }

    pub const fn last_direction(&self) -> Direction {
        self.last_direction
    }

    pub fn current_user(&self) -> Option<&UserRecord> {
        self.users.current()
    }

    pub fn current_message(&self) -> Option<&MessageRecord> {
        self.messages.current()
    }

    pub const fn counter(&self) -> Option<&AggregateCounter> {
        self.counter.as_ref()
    }

    pub const fn users(&self) -> &UserCursor {
        &self.users
    }

    pub const fn messages(&self) -> &MessageCursor {
        &self.messages
    }

    /// Fetch the controller is waiting for
    pub const fn pending(&self) -> Option<&FetchRequest> {
        self.pending.as_ref()
    }

    // ===== Navigation =====

    /// Load the users page.
    ///
    /// Accepted in `Idle`, and in `Exhausted` when the last users page was empty.
    pub fn start(&mut self) -> Option<FetchRequest> {
        let reloadable = match self.state {
            NavigationState::Idle => true,
            NavigationState::Exhausted => self.users.is_empty(),
            _ => false,
        };
        if !reloadable {
            log::warn!("start() ignored in state {:?}", self.state);
            return None;
        }

        let request = FetchRequest::Users {
            ticket: self.next_ticket(),
            page_size: self.users_page_size,
        };
        self.pending = Some(request.clone());
        self.state = NavigationState::FetchingUsers;
        Some(request)
    }

    pub fn go_to_next_user(&mut self) -> Option<FetchRequest> {
        self.navigate_user(Direction::Next)
    }

    pub fn go_to_prev_user(&mut self) -> Option<FetchRequest> {
        self.navigate_user(Direction::Prev)
    }

    /// Move the user cursor one step.
    ///
    /// Supersedes an outstanding message fetch. Repeating the direction that
    /// exhausted the users is a silent no-op.
    pub fn navigate_user(&mut self, direction: Direction) -> Option<FetchRequest> {
        if !self.users_loaded || self.state == NavigationState::FetchingUsers {
            log::warn!("User navigation ignored: users not loaded ({:?})", self.state);
            return None;
        }
        if self.state == NavigationState::Exhausted && self.exhausted == Some(direction) {
            log::debug!(
                "Users already exhausted towards {direction:?}, only {:?} can move",
                direction.opposite()
            );
            return None;
        }

        self.last_direction = direction;
        self.step_user(direction)
    }

    pub fn go_to_next_message(&mut self) {
        self.navigate_message(Direction::Next);
    }

    pub fn go_to_prev_message(&mut self) {
        self.navigate_message(Direction::Prev);
    }

    /// Move the message cursor one step. Never switches users.
    ///
    /// Also works in `Exhausted` while the last shown user is still selected.
    pub fn navigate_message(&mut self, direction: Direction) {
        let browsable = match self.state {
            NavigationState::Ready => true,
            NavigationState::Exhausted => {
                self.anchor.is_some() && self.messages.index().is_some()
            }
            _ => false,
        };
        if !browsable {
            log::warn!("Message navigation ignored in state {:?}", self.state);
            return;
        }

        if self.messages.step(direction).is_some() {
            self.publish_current();
        } else {
            self.emit(NavigationEvent::MessageBoundaryReached { direction });
        }
    }

    // ===== Completions =====

    /// Apply a finished fetch. Returns the follow-up fetch, if any.
    pub fn complete(&mut self, completion: FetchCompletion) -> Option<FetchRequest> {
        if !self.is_awaited(&completion) {
            log::debug!(
                "Dropping stale completion (generation {})",
                completion.ticket().generation
            );
            return None;
        }
        self.pending = None;

        match completion {
            FetchCompletion::Users { result, .. } => match result {
                Ok(users) => {
                    let count = users.len();
                    log::info!("Loaded {count} users");
                    self.users.load(users);
                    self.users_loaded = true;
                    self.anchor = None;
                    self.exhausted = None;
                    self.state = NavigationState::Idle;
                    self.emit(NavigationEvent::UsersLoaded { count });
                    self.navigate_user(Direction::Next)
                }
                Err(e) => {
                    self.log_failure(&e);
                    self.state = NavigationState::Idle;
                    self.emit(NavigationEvent::FetchFailed {
                        reason: e.to_string(),
                    });
                    None
                }
            },
            FetchCompletion::Messages {
                user_id, result, ..
            } => match result {
                Ok(MessageFetch::Loaded { messages, counter }) => {
                    self.apply_messages(&user_id, messages, counter)
                }
                Ok(MessageFetch::Empty) => {
                    log::debug!("User {user_id} has no messages, skipping");
                    self.step_user(self.last_direction)
                }
                Err(e) => {
                    self.log_failure(&e);
                    self.users.restore(self.anchor);
                    self.state = self.stable_state();
                    self.emit(NavigationEvent::FetchFailed {
                        reason: e.to_string(),
                    });
                    None
                }
            },
        }
    }

    // ===== Internals =====

    fn next_ticket(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket {
            generation: self.generation,
        }
    }

    fn is_awaited(&self, completion: &FetchCompletion) -> bool {
        match (&self.pending, completion) {
            (Some(FetchRequest::Users { ticket, .. }), FetchCompletion::Users { ticket: t, .. }) => {
                ticket == t
            }
            (
                Some(FetchRequest::Messages { ticket, user_id }),
                FetchCompletion::Messages {
                    ticket: t,
                    user_id: u,
                    ..
                },
            ) => {
                ticket == t
                    && user_id == u
                    && self.users.current().is_some_and(|user| &user.id == u)
            }
            _ => false,
        }
    }

    /// Step the user cursor and request that user's messages, or settle in
    /// `Exhausted` when the cursor cannot move
    fn step_user(&mut self, direction: Direction) -> Option<FetchRequest> {
        let Some(user_id) = self.users.step(direction).map(|u| u.id.clone()) else {
            self.pending = None;
            self.users.restore(self.anchor);
            self.state = NavigationState::Exhausted;
            self.exhausted = Some(direction);
            log::info!("Users exhausted towards {direction:?}");
            self.emit(NavigationEvent::UsersExhausted { direction });
            return None;
        };

        log::info!("Switching to user {user_id}");
        let request = FetchRequest::Messages {
            ticket: self.next_ticket(),
            user_id,
        };
        self.pending = Some(request.clone());
        self.state = NavigationState::FetchingMessages;
        Some(request)
    }

    fn apply_messages(
        &mut self,
        user_id: &str,
        messages: Vec<MessageRecord>,
        counter: AggregateCounter,
    ) -> Option<FetchRequest> {
        let fetched = messages.len();
        let owned: Vec<MessageRecord> = messages
            .into_iter()
            .filter(|m| m.owner_user_id == user_id)
            .collect();
        if owned.len() != fetched {
            log::warn!(
                "Dropped {} messages not owned by user {user_id}",
                fetched - owned.len()
            );
        }
        if owned.is_empty() {
            log::debug!("User {user_id} has no messages of its own, skipping");
            return self.step_user(self.last_direction);
        }

        self.messages.load(owned);
        self.messages.next();
        self.counter = Some(counter);
        self.anchor = self.users.index();
        self.exhausted = None;
        self.state = NavigationState::Ready;
        self.publish_current();
        None
    }

    fn stable_state(&self) -> NavigationState {
        if self.anchor.is_some() {
            NavigationState::Ready
        } else {
            NavigationState::Idle
        }
    }

    /// Publish the selected (user, message, counter)
    fn publish_current(&self) {
        let (Some(user), Some(message), Some(counter), Some(index)) = (
            self.users.current(),
            self.messages.current(),
            self.counter.as_ref(),
            self.messages.index(),
        ) else {
            log::warn!("Nothing to publish in state {:?}", self.state);
            return;
        };

        self.emit(NavigationEvent::MessageReady {
            user: user.clone(),
            message: message.clone(),
            counter: counter.clone(),
            index,
            total: self.messages.len(),
        });
    }

    fn emit(&self, event: NavigationEvent) {
        self.presenter.on_state_changed(&event);
    }

    fn log_failure(&self, err: &crate::error::CoreError) {
        if err.is_expected() || err.is_transient() {
            log::warn!("Fetch failed in state {:?}: {err}", self.state);
        } else {
            log::error!("Fetch failed in state {:?}: {err}", self.state);
        }
    }
}
