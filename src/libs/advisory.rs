//! Advisory panel with last-write-wins refreshes.
//!
//! Each refresh takes a [`Ticket`] from a monotonically increasing counter.
//! When the advisor answers, the result is applied only if no newer refresh
//! has started in the meantime; stale answers are dropped. There is no
//! cancellation, a superseded call simply runs to completion and is ignored.
//!
//! ```text
//! begin() -> #1 ──────────────────── complete(#1) dropped
//!            begin() -> #2 ── complete(#2) applied
//! ```

use crate::api::Advisor;
use crate::libs::task::Task;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence token for one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
struct PanelState {
    text: Option<String>,
    applied: u64,
}

#[derive(Debug, Default)]
pub struct AdvisoryPanel {
    latest: AtomicU64,
    state: Mutex<PanelState>,
}

impl AdvisoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a refresh, superseding any in flight.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Applies `text` if `ticket` is still the newest refresh.
    pub fn complete(&self, ticket: Ticket, text: String) -> bool {
        let mut state = self.state.lock();
        if !self.is_latest(ticket) || ticket.0 <= state.applied {
            tracing::debug!(ticket = ticket.0, "dropping stale advisory result");
            return false;
        }
        state.text = Some(text);
        state.applied = ticket.0;
        true
    }

    /// Text of the most recently applied refresh.
    pub fn text(&self) -> Option<String> {
        self.state.lock().text.clone()
    }

    /// Runs one analysis and applies it unless superseded.
    pub async fn refresh<A: Advisor>(&self, advisor: &A, tasks: &[Task]) -> bool {
        let ticket = self.begin();
        let text = advisor.analyze_tasks(tasks).await;
        self.complete(ticket, text)
    }
}
