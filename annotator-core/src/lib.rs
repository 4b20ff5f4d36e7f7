//! Annotator Core Library
//!
//! Navigation and synchronization engine for reviewing a page of users and,
//! for the selected user, that user's messages ranked by relevance score:
//! - Saturating cursors over users and messages ([`Cursor`])
//! - The navigation state machine ([`NavigationController`])
//! - An async driver running it against a [`RecordStore`] ([`Navigator`])
//!
//! Rendering is left to a [`Presenter`], which receives every
//! [`NavigationEvent`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use annotator_core::{config, create_store, LoggingPresenter, Navigator, NavigatorConfig};
//!
//! # async fn example() -> annotator_core::CoreResult<()> {
//! let config = NavigatorConfig::load_or_default(&config::default_path()).await?;
//! let store = create_store(config.store.clone())?;
//! let mut navigator = Navigator::new(store, Arc::new(LoggingPresenter), &config);
//!
//! navigator.start().await;
//! navigator.next_message();
//! navigator.next_user().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use annotator_store::{create_store, RecordStore, StoreConfig};
pub use config::NavigatorConfig;
pub use cursor::{Cursor, MessageCursor, UserCursor};
pub use error::{CoreError, CoreResult};
pub use services::{NavigationController, Navigator};
pub use traits::{LoggingPresenter, Presenter};
pub use types::{Direction, NavigationEvent, NavigationState};
