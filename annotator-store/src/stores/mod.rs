//! Concrete record store implementations

#[cfg(feature = "elasticsearch")]
mod elasticsearch;

#[cfg(feature = "elasticsearch")]
pub use elasticsearch::ElasticsearchStore;
