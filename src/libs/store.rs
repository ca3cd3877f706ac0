//! In-memory task collection mirrored to a blob store.
//!
//! [`TaskStore`] owns the live collection. Reads come from memory; every
//! mutation produces a new snapshot through [`super::lifecycle`] and is written
//! through to the backend before it becomes visible.
//!
//! ## Failure Policy
//!
//! - **Load**: a read error or an unparsable blob yields an empty collection.
//!   The problem is logged, never surfaced.
//! - **Commit**: write errors propagate to the caller and the in-memory
//!   snapshot is left as it was.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use sheettask::db::memory::MemoryBlobStore;
//! use sheettask::libs::store::TaskStore;
//! use sheettask::libs::task::{Status, TaskDraft};
//!
//! let mut store = TaskStore::open(MemoryBlobStore::new());
//! let task = store.create(TaskDraft::new("Renew passport"), Utc::now())?;
//! store.set_status(&task.id, Status::Done, Utc::now())?;
//! assert_eq!(store.tasks()[0].status, Status::Done);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::filter::TaskStats;
use super::lifecycle;
use super::task::{Status, Task, TaskDraft};
use crate::db::BlobStore;
use anyhow::Result;
use chrono::{DateTime, Utc};

pub struct TaskStore<B: BlobStore> {
    tasks: Vec<Task>,
    backend: B,
}

/// Parses a stored collection.
pub fn decode(blob: &str) -> serde_json::Result<Vec<Task>> {
    serde_json::from_str(blob)
}

/// Serialises a collection to the stored JSON array format.
pub fn encode(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string(tasks)
}

impl<B: BlobStore> TaskStore<B> {
    /// Wraps `backend` and loads whatever it holds.
    pub fn open(backend: B) -> Self {
        let mut store = Self { tasks: Vec::new(), backend };
        store.tasks = store.load();
        store
    }

    /// Reads the stored collection, falling back to empty.
    pub fn load(&self) -> Vec<Task> {
        let blob = match self.backend.get() {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stored tasks, starting empty");
                return Vec::new();
            }
        };

        match decode(&blob) {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored tasks are unreadable, starting empty");
                Vec::new()
            }
        }
    }

    /// Replaces the collection and writes it through to the backend.
    pub fn commit(&mut self, tasks: Vec<Task>) -> Result<()> {
        let blob = encode(&tasks)?;
        self.backend.set(&blob)?;
        tracing::debug!(count = tasks.len(), "committed tasks");
        self.tasks = tasks;
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::of(&self.tasks)
    }

    /// Resolves a full id or unique id prefix.
    pub fn find(&self, id: &str) -> Result<&Task> {
        Ok(lifecycle::find(&self.tasks, id)?)
    }

    pub fn create(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> Result<Task> {
        let (task, tasks) = lifecycle::create(&self.tasks, draft, now)?;
        self.commit(tasks)?;
        Ok(task)
    }

    pub fn update(&mut self, task: &Task) -> Result<()> {
        let tasks = lifecycle::update(&self.tasks, task);
        self.commit(tasks)
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        let tasks = lifecycle::delete(&self.tasks, id);
        self.commit(tasks)
    }

    /// Sets the status of `id` and returns the task as it ends up.
    pub fn set_status(&mut self, id: &str, status: Status, now: DateTime<Utc>) -> Result<Option<Task>> {
        let tasks = lifecycle::set_status(&self.tasks, id, status, now);
        self.commit(tasks)?;
        Ok(self.tasks.iter().find(|t| t.id == id).cloned())
    }

    pub fn cycle_status(&mut self, id: &str, now: DateTime<Utc>) -> Result<Option<Task>> {
        let tasks = lifecycle::cycle_status(&self.tasks, id, now);
        self.commit(tasks)?;
        Ok(self.tasks.iter().find(|t| t.id == id).cloned())
    }

    /// Drops every task and removes the stored blob.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.clear()?;
        self.tasks.clear();
        Ok(())
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}
