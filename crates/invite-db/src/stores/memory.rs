//! In-memory implementation of InvitationStore
//!
//! Keeps rows in an ordered map behind a single lock, so a mark-used is an
//! atomic compare-and-set exactly like the PostgreSQL conditional update.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, instrument};

use invite_core::entities::InvitationCode;
use invite_core::traits::{InvitationStore, MarkOutcome, RepoResult};
use invite_core::value_objects::{RowKey, ScanRange};

use crate::models::InvitationModel;

/// In-memory invitation store keyed by code
#[derive(Debug, Default)]
pub struct MemoryInvitationStore {
    /// code -> `used` attribute (`None` when the attribute is absent)
    rows: Mutex<BTreeMap<String, Option<bool>>>,
    mutations: AtomicUsize,
}

impl MemoryInvitationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given codes, all unused
    pub fn with_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        for code in codes {
            store.insert(code, Some(false));
        }
        store
    }

    /// Insert or replace a row
    pub fn insert(&self, code: impl Into<String>, used: Option<bool>) {
        self.rows.lock().insert(code.into(), used);
    }

    /// Raw `used` attribute of a row; outer `None` means no such row
    pub fn used_attribute(&self, code: &str) -> Option<Option<bool>> {
        self.rows.lock().get(code).copied()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }

    /// Number of successful mark-used writes since creation
    pub fn mutations(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }
}

fn decode(code: &str, used: Option<bool>) -> InvitationCode {
    InvitationCode::from(InvitationModel {
        code: code.to_string(),
        used,
    })
}

#[async_trait]
impl InvitationStore for MemoryInvitationStore {
    #[instrument(skip(self))]
    async fn get(&self, code: &str) -> RepoResult<Option<InvitationCode>> {
        let rows = self.rows.lock();
        Ok(rows.get(code).map(|used| decode(code, *used)))
    }

    #[instrument(skip(self))]
    async fn scan(&self, range: &ScanRange) -> RepoResult<Vec<InvitationCode>> {
        let rows = self.rows.lock();
        let bounds = (
            Bound::Included(range.start.as_str()),
            Bound::Excluded(range.end.as_str()),
        );
        Ok(rows
            .range::<str, _>(bounds)
            .take(2)
            .map(|(code, used)| decode(code, *used))
            .collect())
    }

    #[instrument(skip(self))]
    async fn mark_used(&self, key: &RowKey) -> RepoResult<MarkOutcome> {
        let mut rows = self.rows.lock();
        let outcome = match rows.get_mut(key.as_str()) {
            None => MarkOutcome::Missing,
            Some(Some(true)) => MarkOutcome::AlreadyUsed,
            Some(used) => {
                *used = Some(true);
                self.mutations.fetch_add(1, Ordering::SeqCst);
                MarkOutcome::Applied
            }
        };
        debug!(key = %key, ?outcome, "Mark-used evaluated");
        Ok(outcome)
    }

    async fn health_check(&self) -> RepoResult<()> {
        Ok(())
    }
}
