//! # annotator-store
//!
//! Read-only access to the document store behind the message annotator:
//! users, each user's messages ranked by relevance score, and a corpus-wide
//! counter.
//!
//! ## Feature Flags
//!
//! - **`elasticsearch`** *(default)*: Enable [`ElasticsearchStore`].
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use annotator_store::{create_store, RecordStore, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = create_store(StoreConfig::default())?;
//!
//!     let users = store.fetch_users_page(50).await?;
//!     for user in &users {
//!         let messages = store.fetch_messages_for_user(&user.id).await?;
//!         println!("{}: {} messages", user.id, messages.len());
//!     }
//!
//!     let counter = store.fetch_aggregate_counter().await?;
//!     println!("{} matched, last at {}", counter.total_count, counter.last_match_time);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All store operations return [`Result<T, StoreError>`](StoreError).
//! Connectivity failures are [`StoreError::NetworkError`] and
//! [`StoreError::Timeout`]; documents that cannot be turned into typed records
//! are [`StoreError::MalformedRecord`]. Nothing is retried automatically.

mod config;
mod error;
#[cfg(feature = "elasticsearch")]
mod factory;
mod http_client;
mod stores;
mod traits;
mod types;
mod utils;

pub use config::{MAX_RESULT_WINDOW, StoreConfig};

pub use error::{Result, StoreError};

#[cfg(feature = "elasticsearch")]
pub use factory::create_store;

pub use traits::RecordStore;

pub use types::{AggregateCounter, MessageRecord, UserRecord};

pub use utils::datetime;

#[cfg(feature = "elasticsearch")]
pub use stores::ElasticsearchStore;
