//! Async driver running the controller against a record store

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use annotator_store::{RecordStore, StoreError, UserRecord};

use crate::config::NavigatorConfig;
use crate::error::CoreResult;
use crate::services::NavigationController;
use crate::traits::Presenter;
use crate::types::{FetchCompletion, FetchRequest, MessageFetch, NavigationState};

/// Navigation service.
///
/// Every navigation call takes `&mut self`, so one call (including every
/// user it skips) finishes before the next begins.
pub struct Navigator {
    store: Arc<dyn RecordStore>,
    controller: NavigationController,
    fetch_timeout: Option<Duration>,
}

impl Navigator {
    #[must_use]
    pub fn new(
        store: Arc<dyn RecordStore>,
        presenter: Arc<dyn Presenter>,
        config: &NavigatorConfig,
    ) -> Self {
        Self {
            store,
            controller: NavigationController::new(presenter, config.users_page_size),
            fetch_timeout: config.fetch_timeout_secs.map(Duration::from_secs),
        }
    }

    pub const fn controller(&self) -> &NavigationController {
        &self.controller
    }

    pub const fn state(&self) -> NavigationState {
        self.controller.state()
    }

    /// Load the users page and show the first user with messages
    pub async fn start(&mut self) -> NavigationState {
        let request = self.controller.start();
        self.drive(request).await
    }

    pub async fn next_user(&mut self) -> NavigationState {
        let request = self.controller.go_to_next_user();
        self.drive(request).await
    }

    pub async fn prev_user(&mut self) -> NavigationState {
        let request = self.controller.go_to_prev_user();
        self.drive(request).await
    }

    pub fn next_message(&mut self) -> NavigationState {
        self.controller.go_to_next_message();
        self.controller.state()
    }

    pub fn prev_message(&mut self) -> NavigationState {
        self.controller.go_to_prev_message();
        self.controller.state()
    }

    /// Run requests until the controller settles
    async fn drive(&mut self, mut request: Option<FetchRequest>) -> NavigationState {
        while let Some(req) = request.take() {
            let completion = execute(self.store.as_ref(), req, self.fetch_timeout).await;
            request = self.controller.complete(completion);
        }
        self.controller.state()
    }
}

/// Perform one fetch against `store`.
///
/// A message fetch also reads the aggregate counter when the user has
/// messages; a failure of either fails the whole fetch.
pub async fn execute(
    store: &dyn RecordStore,
    request: FetchRequest,
    timeout: Option<Duration>,
) -> FetchCompletion {
    match request {
        FetchRequest::Users { ticket, page_size } => FetchCompletion::Users {
            ticket,
            result: with_timeout(store, timeout, fetch_users(store, page_size)).await,
        },
        FetchRequest::Messages { ticket, user_id } => {
            let result = with_timeout(store, timeout, fetch_messages(store, &user_id)).await;
            FetchCompletion::Messages {
                ticket,
                user_id,
                result,
            }
        }
    }
}

async fn fetch_users(store: &dyn RecordStore, page_size: u32) -> CoreResult<Vec<UserRecord>> {
    Ok(store.fetch_users_page(page_size).await?)
}

async fn fetch_messages(store: &dyn RecordStore, user_id: &str) -> CoreResult<MessageFetch> {
    let messages = store.fetch_messages_for_user(user_id).await?;
    if messages.is_empty() {
        return Ok(MessageFetch::Empty);
    }
    let counter = store.fetch_aggregate_counter().await?;
    Ok(MessageFetch::Loaded { messages, counter })
}

async fn with_timeout<T>(
    store: &dyn RecordStore,
    timeout: Option<Duration>,
    fetch: impl Future<Output = CoreResult<T>>,
) -> CoreResult<T> {
    let Some(limit) = timeout else {
        return fetch.await;
    };
    tokio::time::timeout(limit, fetch).await.unwrap_or_else(|_| {
        Err(StoreError::Timeout {
            store: store.id().to_string(),
            detail: format!("fetch did not complete within {}s", limit.as_secs()),
        }
        .into())
    })
}
