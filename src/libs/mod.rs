//! Core library modules for sheettask.
//!
//! ## Features
//!
//! - **Task Model**: the task entity, its enums and validation
//! - **Recurrence**: status transitions and the roll-forward of recurring tasks
//! - **Lifecycle**: create, update, delete over immutable snapshots
//! - **Filtering**: search queries and dashboard counters
//! - **Store**: the owned collection mirrored to a blob backend
//! - **Advisory**: last-write-wins sequencing of AI advice
//! - **Infrastructure**: configuration, data storage, secrets, messaging, export, views
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use sheettask::db::memory::MemoryBlobStore;
//! use sheettask::libs::{filter::filter, store::TaskStore, task::TaskDraft};
//!
//! let mut store = TaskStore::open(MemoryBlobStore::new());
//! store.create(TaskDraft::new("Pay Rent"), Utc::now())?;
//! assert_eq!(filter(store.tasks(), "rent").len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod advisory;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod filter;
pub mod formatter;
pub mod lifecycle;
pub mod messages;
pub mod recurrence;
pub mod secret;
pub mod store;
pub mod task;
pub mod view;
