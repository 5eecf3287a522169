//! Test helper module
//!
//! Mock implementations and factory helpers shared by the service tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use jid_availability_checker::{CheckRequest, CheckerError, ExistenceChecker};
use tokio::sync::{watch, RwLock};

use crate::services::{ServiceContext, ValidatorService};
use crate::traits::StateObserver;
use crate::types::{DisplayState, HostCatalog, HostEntry, ValidationState};

// ===== MockExistenceChecker =====

/// Scriptable existence checker.
///
/// Records every request it receives; responses can be held open to exercise
/// the stale-response path.
pub struct MockExistenceChecker {
    taken: RwLock<HashSet<(String, String)>>,
    failure: RwLock<Option<CheckerError>>,
    requests: RwLock<Vec<CheckRequest>>,
    hold_tx: watch::Sender<bool>,
}

impl MockExistenceChecker {
    pub fn new() -> Self {
        let (hold_tx, _) = watch::channel(false);
        Self {
            taken: RwLock::new(HashSet::new()),
            failure: RwLock::new(None),
            requests: RwLock::new(Vec::new()),
            hold_tx,
        }
    }

    /// Mark a JID as already registered.
    pub async fn set_taken(&self, username: &str, domain: &str) {
        self.taken
            .write()
            .await
            .insert((username.to_string(), domain.to_string()));
    }

    /// Make every check fail with `error`.
    pub async fn set_failure(&self, error: CheckerError) {
        *self.failure.write().await = Some(error);
    }

    /// Requests received so far.
    pub async fn requests(&self) -> Vec<CheckRequest> {
        self.requests.read().await.clone()
    }

    /// Block responses until [`release_responses`](Self::release_responses).
    pub fn hold_responses(&self) {
        self.hold_tx.send_replace(true);
    }

    /// Let held responses complete.
    pub fn release_responses(&self) {
        self.hold_tx.send_replace(false);
    }

    /// Wait until at least `n` requests have arrived.
    pub async fn wait_for_requests(&self, n: usize) {
        loop {
            if self.requests.read().await.len() >= n {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}

#[async_trait]
impl ExistenceChecker for MockExistenceChecker {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn check(&self, request: &CheckRequest) -> Result<(), CheckerError> {
        self.requests.write().await.push(request.clone());

        let mut gate = self.hold_tx.subscribe();
        // Returns immediately when the gate is already open
        let _ = gate.wait_for(|held| !held).await;

        if let Some(err) = self.failure.read().await.clone() {
            return Err(err);
        }
        let key = (request.username.clone(), request.domain.clone());
        if self.taken.read().await.contains(&key) {
            return Err(CheckerError::JidExists {
                username: request.username.clone(),
                domain: request.domain.clone(),
            });
        }
        Ok(())
    }
}

// ===== CollectingObserver =====

/// Observer recording every notification.
pub struct CollectingObserver {
    events: RwLock<Vec<(String, ValidationState, DisplayState)>>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Whether `field_id` was ever notified of `state`.
    pub async fn saw(&self, field_id: &str, state: &ValidationState) -> bool {
        self.count(field_id, state).await > 0
    }

    /// How many times `field_id` was notified of `state`.
    pub async fn count(&self, field_id: &str, state: &ValidationState) -> usize {
        self.events
            .read()
            .await
            .iter()
            .filter(|(id, s, _)| id == field_id && s == state)
            .count()
    }
}

#[async_trait]
impl StateObserver for CollectingObserver {
    async fn state_changed(
        &self,
        field_id: &str,
        state: &ValidationState,
        display: &DisplayState,
    ) {
        self.events
            .write()
            .await
            .push((field_id.to_string(), state.clone(), display.clone()));
    }
}

// ===== Factory helpers =====

/// Single-host catalog used by most tests.
pub fn catalog() -> HostCatalog {
    HostCatalog::new(vec![HostEntry::new("jabber.at")], "jabber.at")
}

/// Validator wired to a mock checker and a collecting observer.
pub fn create_test_service(
    hosts: HostCatalog,
) -> (
    ValidatorService,
    Arc<MockExistenceChecker>,
    Arc<CollectingObserver>,
) {
    let checker = Arc::new(MockExistenceChecker::new());
    let observer = Arc::new(CollectingObserver::new());
    let ctx = Arc::new(ServiceContext::new(
        Arc::clone(&checker) as Arc<dyn ExistenceChecker>,
        Arc::clone(&observer) as Arc<dyn StateObserver>,
        hosts,
    ));
    (ValidatorService::new(ctx), checker, observer)
}

/// Advance through timers until `field_id` reaches `state` (panics after a
/// generous paused-clock deadline).
pub async fn drain_until(observer: &CollectingObserver, field_id: &str, state: &ValidationState) {
    drain_until_nth(observer, field_id, state, 1).await;
}

/// Like [`drain_until`], but waits for the `n`-th notification of `state` —
/// needed when a test drives the same field through the same state twice.
pub async fn drain_until_nth(
    observer: &CollectingObserver,
    field_id: &str,
    state: &ValidationState,
    n: usize,
) {
    let deadline = Duration::from_secs(5);
    tokio::time::timeout(deadline, async {
        loop {
            if observer.count(field_id, state).await >= n {
                return;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("field {field_id} never reached {state:?} ({n} times)"));
}
