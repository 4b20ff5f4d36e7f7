//! Fetch requests and completions exchanged between the controller and its driver

use annotator_store::{AggregateCounter, MessageRecord, UserRecord};

use crate::error::CoreResult;

/// Generation tag identifying one issued fetch.
///
/// A completion is applied only if its ticket is the one the controller is
/// still waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub generation: u64,
}

/// Fetch the controller wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// One page of users, ascending by id
    Users { ticket: FetchTicket, page_size: u32 },
    /// All messages of `user_id`, score descending, plus the aggregate counter
    Messages { ticket: FetchTicket, user_id: String },
}

impl FetchRequest {
    pub const fn ticket(&self) -> FetchTicket {
        match self {
            Self::Users { ticket, .. } | Self::Messages { ticket, .. } => *ticket,
        }
    }
}

/// Outcome of a message fetch
#[derive(Debug, Clone, PartialEq)]
pub enum MessageFetch {
    /// The user has no messages; the counter was not fetched
    Empty,
    Loaded {
        messages: Vec<MessageRecord>,
        counter: AggregateCounter,
    },
}

/// Result of a [`FetchRequest`], handed back to the controller
#[derive(Debug)]
pub enum FetchCompletion {
    Users {
        ticket: FetchTicket,
        result: CoreResult<Vec<UserRecord>>,
    },
    Messages {
        ticket: FetchTicket,
        user_id: String,
        result: CoreResult<MessageFetch>,
    },
}

impl FetchCompletion {
    pub const fn ticket(&self) -> FetchTicket {
        match self {
            Self::Users { ticket, .. } | Self::Messages { ticket, .. } => *ticket,
        }
    }
}
