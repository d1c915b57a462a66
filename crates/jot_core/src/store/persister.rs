//! Background persistence worker.
//!
//! # Responsibility
//! - Drain snapshot jobs onto a key-value store off the caller's thread.
//! - Keep write failures out of the mutation path: log and move on.
//!
//! # Invariants
//! - Jobs for one key apply in enqueue order; the last write wins.
//! - A failed write is not retried; the next mutation's snapshot still
//!   carries the full collection.
//! - `flush` is the only operation that waits on the worker.

use crate::storage::KeyValueStore;
use log::{error, info};
use std::sync::mpsc::{channel, Sender};
use std::thread::{Builder, JoinHandle};

enum Job {
    Write { key: &'static str, payload: String },
    Flush(Sender<()>),
}

/// Owns the worker thread for one storage backing.
///
/// Cloneable [`PersistHandle`]s are handed to the stores; the worker
/// exits once the persister and every handle are dropped.
pub struct Persister {
    tx: Sender<Job>,
    _worker: JoinHandle<()>,
}

impl Persister {
    /// Spawns the worker thread owning the given store.
    pub fn spawn(store: Box<dyn KeyValueStore>) -> std::io::Result<Self> {
        let (tx, rx) = channel();
        let worker = Builder::new()
            .name("jot-persist".to_string())
            .spawn(move || {
                for job in rx {
                    match job {
                        Job::Write { key, payload } => match store.set(key, &payload) {
                            Ok(()) => {
                                info!(
                                    "event=persist module=store status=ok key={} bytes={}",
                                    key,
                                    payload.len()
                                );
                            }
                            Err(err) => {
                                error!(
                                    "event=persist module=store status=error key={} error={}",
                                    key, err
                                );
                            }
                        },
                        Job::Flush(ack) => {
                            let _ = ack.send(());
                        }
                    }
                }
            })?;

        Ok(Self {
            tx,
            _worker: worker,
        })
    }

    /// Returns a handle stores use to enqueue snapshot writes.
    pub fn handle(&self) -> PersistHandle {
        PersistHandle {
            tx: self.tx.clone(),
        }
    }

    /// Blocks until every job enqueued before this call has been applied.
    ///
    /// Durability completion signal for shutdown and tests; regular
    /// mutation paths never call it.
    pub fn flush(&self) {
        PersistHandle {
            tx: self.tx.clone(),
        }
        .flush();
    }
}

/// Cheap, cloneable enqueue-side of the persistence worker.
#[derive(Clone)]
pub struct PersistHandle {
    tx: Sender<Job>,
}

impl PersistHandle {
    /// Enqueues a full-collection snapshot write and returns immediately.
    pub fn enqueue(&self, key: &'static str, payload: String) {
        if self.tx.send(Job::Write { key, payload }).is_err() {
            // Worker already gone; the session keeps running on memory.
            error!(
                "event=persist module=store status=error key={} error=worker unavailable",
                key
            );
        }
    }

    /// Blocks until previously enqueued jobs have been applied.
    pub fn flush(&self) {
        let (ack_tx, ack_rx) = channel();
        if self.tx.send(Job::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }
}
