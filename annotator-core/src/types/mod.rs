//! Type definitions

mod fetch;
mod navigation;

pub use fetch::{FetchCompletion, FetchRequest, FetchTicket, MessageFetch};
pub use navigation::{Direction, NavigationEvent, NavigationState};

// Re-export the store's record types
pub use annotator_store::{AggregateCounter, MessageRecord, UserRecord};
