//! Cancellable UI timers
//!
//! At most one timer per [`TimerKind`] is pending. Scheduling a kind again
//! aborts the previous one, and firings that were already queued for a
//! superseded or cancelled timer are discarded.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TimerKind {
    /// Dismiss the current flash message
    HideFlash,
    /// Tear the finished game down
    Restart,
}

struct Fired {
    kind: TimerKind,
    id: u64,
}

pub(crate) struct Timers {
    tx: mpsc::UnboundedSender<Fired>,
    rx: mpsc::UnboundedReceiver<Fired>,
    pending: HashMap<TimerKind, (u64, JoinHandle<()>)>,
    next_id: u64,
}

impl Timers {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: HashMap::new(),
            next_id: 0,
        }
    }

    /// Fire `kind` after `delay`, replacing any pending timer of that kind
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration) {
        self.cancel(kind);

        let id = self.next_id;
        self.next_id += 1;

        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Fired { kind, id });
        });

        self.pending.insert(kind, (id, task));
    }

    pub fn cancel(&mut self, kind: TimerKind) {
        if let Some((_, task)) = self.pending.remove(&kind) {
            task.abort();
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, (_, task)) in self.pending.drain() {
            task.abort();
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.contains_key(&kind)
    }

    /// Wait for the next live timer to fire
    ///
    /// Never resolves while nothing is pending.
    pub async fn next(&mut self) -> TimerKind {
        loop {
            // The sender half lives in `self`, so the channel never closes
            let Some(fired) = self.rx.recv().await else {
                return std::future::pending().await;
            };

            let live = matches!(self.pending.get(&fired.kind), Some((id, _)) if *id == fired.id);
            if live {
                self.pending.remove(&fired.kind);
                return fired.kind;
            }

            tracing::debug!(kind = ?fired.kind, "Dropping stale timer");
        }
    }
}

impl Drop for Timers {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
