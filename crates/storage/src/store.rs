use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::{RwLock, watch};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Submission;

/// Complete contents of the submission collection at one point in time, as
/// the raw JSON object the store transport delivers: record key mapped to
/// submission payload.
#[derive(Debug, Clone)]
pub struct StoreSnapshot(Value);

impl StoreSnapshot {
    pub fn empty() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }

    /// Decodes the snapshot into submissions, newest first.
    ///
    /// A snapshot whose top level is not an object decodes to the empty
    /// collection, so a corrupt or partial snapshot degrades to an empty
    /// ranking instead of failing the view. Records that do not deserialize
    /// are skipped; nothing is corrected by guessing.
    pub fn decode(&self) -> Vec<Submission> {
        let Some(map) = self.0.as_object() else {
            return Vec::new();
        };

        let mut submissions: Vec<Submission> = map
            .values()
            .filter_map(|payload| serde_json::from_value(payload.clone()).ok())
            .collect();
        submissions.sort_by_key(|s| std::cmp::Reverse(s.timestamp));
        submissions
    }
}

impl From<Value> for StoreSnapshot {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Handle to the submission store: an append-only collection of submission
/// records shared by every client of the service.
///
/// Every mutation pushes a fresh full snapshot to all subscribers; there is
/// no per-record delete or edit, only the bulk clear. Connectivity gates both
/// mutating operations and is observable as its own stream.
#[derive(Clone)]
pub struct SubmissionStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    records: RwLock<BTreeMap<String, Value>>,
    snapshots: watch::Sender<StoreSnapshot>,
    connectivity: watch::Sender<bool>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(StoreSnapshot::empty());
        let (connectivity, _) = watch::channel(true);

        Self {
            inner: Arc::new(StoreInner {
                records: RwLock::new(BTreeMap::new()),
                snapshots,
                connectivity,
            }),
        }
    }

    /// Appends one record to the collection under a store-assigned key.
    pub async fn append(&self, submission: &Submission) -> Result<()> {
        self.ensure_connected()?;

        let payload = serde_json::to_value(submission)?;
        let mut records = self.inner.records.write().await;
        records.insert(Uuid::new_v4().to_string(), payload);
        self.publish(&records);

        Ok(())
    }

    /// Removes every record from the collection.
    pub async fn clear(&self) -> Result<()> {
        self.ensure_connected()?;

        let mut records = self.inner.records.write().await;
        records.clear();
        self.publish(&records);

        Ok(())
    }

    /// Standing subscription to full-collection snapshots, delivered on every
    /// change.
    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.inner.snapshots.subscribe()
    }

    /// Current collection, decoded and ordered newest first.
    pub fn submissions(&self) -> Vec<Submission> {
        self.inner.snapshots.borrow().decode()
    }

    pub fn connected(&self) -> bool {
        *self.inner.connectivity.borrow()
    }

    pub fn connectivity(&self) -> watch::Receiver<bool> {
        self.inner.connectivity.subscribe()
    }

    pub fn set_connected(&self, connected: bool) {
        self.inner.connectivity.send_replace(connected);
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.connected() {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }

    fn publish(&self, records: &BTreeMap<String, Value>) {
        let map: serde_json::Map<String, Value> = records
            .iter()
            .map(|(key, payload)| (key.clone(), payload.clone()))
            .collect();
        self.inner.snapshots.send_replace(StoreSnapshot(Value::Object(map)));
    }
}

impl Default for SubmissionStore {
    fn default() -> Self {
        Self::new()
    }
}
