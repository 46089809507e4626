use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use store::{Record, RecordId};

use crate::collection::RemoteCollection;
use crate::error::{ApiError, Operation};

/// In-memory collection for tests and offline demos.
///
/// Behaves like a permissive mock backend: creates get the next numeric id
/// (or a fixed echo id, see [`echo_create_id`](MemoryCollection::echo_create_id)),
/// updates of unknown ids answer 404, deletes always succeed.
#[derive(Clone, Debug)]
pub struct MemoryCollection<R> {
    inner: Arc<Mutex<Inner<R>>>,
}

#[derive(Debug)]
struct Inner<R> {
    records: Vec<R>,
    next_id: u64,
    echo_id: Option<RecordId>,
    failing: Option<u16>,
    calls: usize,
}

impl<R: Record> Default for MemoryCollection<R> {
    fn default() -> Self {
        Self::seeded(Vec::new())
    }
}

impl<R: Record> MemoryCollection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(records: Vec<R>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|r| match r.id() {
                Some(RecordId::Number(n)) => Some(*n),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            inner: Arc::new(Mutex::new(Inner {
                records,
                next_id,
                echo_id: None,
                failing: None,
                calls: 0,
            })),
        }
    }

    /// Answer every create with this id instead of a fresh one.
    pub fn echo_create_id(self, id: impl Into<RecordId>) -> Self {
        self.lock().echo_id = Some(id.into());
        self
    }

    /// Make every following call fail with `status`; `None` heals it.
    pub fn set_failing(&self, status: Option<u16>) {
        self.lock().failing = status;
    }

    /// Number of calls received so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.lock().calls
    }

    /// Snapshot of what the "server" currently holds.
    pub fn records(&self) -> Vec<R> {
        self.lock().records.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, op: Operation) -> Result<MutexGuard<'_, Inner<R>>, ApiError> {
        let mut inner = self.lock();
        inner.calls += 1;
        match inner.failing {
            Some(status) => Err(ApiError::Status { op, status }),
            None => Ok(inner),
        }
    }
}

impl<R: Record> RemoteCollection<R> for MemoryCollection<R> {
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        let inner = self.begin(Operation::List)?;
        Ok(inner.records.clone())
    }

    async fn create(&self, record: &R) -> Result<R, ApiError> {
        let mut inner = self.begin(Operation::Create)?;
        let id = match inner.echo_id.clone() {
            Some(id) => id,
            None => {
                let n = inner.next_id;
                inner.next_id += 1;
                RecordId::Number(n)
            }
        };
        let mut created = record.clone();
        created.set_id(id);
        inner.records.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &RecordId, record: &R) -> Result<R, ApiError> {
        let op = Operation::Update;
        let mut inner = self.begin(op)?;
        let slot = inner
            .records
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or(ApiError::Status { op, status: 404 })?;
        let mut updated = record.clone();
        updated.set_id(id.clone());
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), ApiError> {
        let mut inner = self.begin(Operation::Delete)?;
        inner.records.retain(|r| r.id() != Some(id));
        Ok(())
    }
}
