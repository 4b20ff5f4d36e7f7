//! Test helpers
//!
//! Scripted mock store, a recording presenter and record factories.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use annotator_store::{
    AggregateCounter, MessageRecord, RecordStore, Result, StoreError, UserRecord,
};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::traits::Presenter;
use crate::types::NavigationEvent;

// ===== Record factories =====

pub fn user(id: &str) -> UserRecord {
    UserRecord::new(id, format!("profile of {id}"))
}

pub fn message(owner: &str, score: f64) -> MessageRecord {
    MessageRecord {
        owner_user_id: owner.to_string(),
        text: format!("{owner} scored {score}"),
        sent_at: Utc.with_ymd_and_hms(2017, 3, 1, 12, 0, 0).unwrap(),
        score,
        time_delta: None,
    }
}

pub fn counter(total_count: u64) -> AggregateCounter {
    AggregateCounter {
        total_count,
        last_match_time: Utc.with_ymd_and_hms(2017, 3, 2, 8, 30, 0).unwrap(),
    }
}

// ===== MockRecordStore =====

fn unavailable(detail: &str) -> StoreError {
    StoreError::NetworkError {
        store: "mock".to_string(),
        detail: detail.to_string(),
    }
}

/// In-memory store answering from a fixed script
pub struct MockRecordStore {
    users: Vec<UserRecord>,
    messages: HashMap<String, Vec<MessageRecord>>,
    counter: AggregateCounter,
    fail_users: Mutex<bool>,
    fail_messages_for: Mutex<Option<String>>,
    fail_counter: Mutex<bool>,
    users_calls: AtomicUsize,
    message_calls: Mutex<Vec<String>>,
    counter_calls: AtomicUsize,
}

impl MockRecordStore {
    /// `script` lists users in store order with their messages (highest score first)
    pub fn new(script: &[(&str, &[f64])]) -> Self {
        Self {
            users: script.iter().map(|(id, _)| user(id)).collect(),
            messages: script
                .iter()
                .map(|(id, scores)| {
                    let list = scores.iter().map(|&s| message(id, s)).collect();
                    ((*id).to_string(), list)
                })
                .collect(),
            counter: counter(1534),
            fail_users: Mutex::new(false),
            fail_messages_for: Mutex::new(None),
            fail_counter: Mutex::new(false),
            users_calls: AtomicUsize::new(0),
            message_calls: Mutex::new(Vec::new()),
            counter_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_fail_users(&self, fail: bool) {
        *self.fail_users.lock().unwrap() = fail;
    }

    pub fn set_fail_messages_for(&self, user_id: Option<&str>) {
        *self.fail_messages_for.lock().unwrap() = user_id.map(str::to_string);
    }

    pub fn set_fail_counter(&self, fail: bool) {
        *self.fail_counter.lock().unwrap() = fail;
    }

    pub fn users_calls(&self) -> usize {
        self.users_calls.load(Ordering::SeqCst)
    }

    /// User ids whose messages were requested, in call order
    pub fn message_calls(&self) -> Vec<String> {
        self.message_calls.lock().unwrap().clone()
    }

    pub fn counter_calls(&self) -> usize {
        self.counter_calls.load(Ordering::SeqCst)
    }

    pub fn counter(&self) -> AggregateCounter {
        self.counter.clone()
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn fetch_users_page(&self, page_size: u32) -> Result<Vec<UserRecord>> {
        self.users_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_users.lock().unwrap() {
            return Err(unavailable("users index unreachable"));
        }
        Ok(self.users.iter().take(page_size as usize).cloned().collect())
    }

    async fn fetch_messages_for_user(&self, user_id: &str) -> Result<Vec<MessageRecord>> {
        self.message_calls.lock().unwrap().push(user_id.to_string());
        if self.fail_messages_for.lock().unwrap().as_deref() == Some(user_id) {
            return Err(unavailable("messages index unreachable"));
        }
        Ok(self.messages.get(user_id).cloned().unwrap_or_default())
    }

    async fn fetch_aggregate_counter(&self) -> Result<AggregateCounter> {
        self.counter_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_counter.lock().unwrap() {
            return Err(unavailable("counter unreachable"));
        }
        Ok(self.counter.clone())
    }
}

// ===== RecordingPresenter =====

/// Presenter keeping every event it receives
pub struct RecordingPresenter {
    events: Mutex<Vec<NavigationEvent>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_event(&self) -> Option<NavigationEvent> {
        self.events.lock().unwrap().last().cloned()
    }
}

impl Presenter for RecordingPresenter {
    fn on_state_changed(&self, event: &NavigationEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
