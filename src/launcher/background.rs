//! Off-thread launcher runs with a single-shot result channel
//!
//! Interactive callers must not block their input loop on the tool. A
//! [`PendingRun`] is the handle to a launcher call running on its own worker
//! thread; the worker delivers exactly one [`ExecutionResult`].

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use super::{ExecutionResult, Launcher};

const WORKER_LOST: &str = "Launcher worker exited without reporting a result";

/// Handle to a launcher run executing on a worker thread
#[derive(Debug)]
pub struct PendingRun {
    reply: Receiver<ExecutionResult>,
    worker: Option<JoinHandle<()>>,
}

impl PendingRun {
    /// Block until the run completes
    pub fn wait(mut self) -> ExecutionResult {
        let result = self
            .reply
            .recv()
            .unwrap_or_else(|_| ExecutionResult::Failure(WORKER_LOST.to_string()));
        self.join_worker();
        result
    }

    /// Take the result if the run has completed
    ///
    /// Returns `None` while the tool is still running. The result is handed
    /// out once; polling again after that reports a lost worker.
    pub fn try_result(&mut self) -> Option<ExecutionResult> {
        match self.reply.try_recv() {
            Ok(result) => {
                self.join_worker();
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.join_worker();
                Some(ExecutionResult::Failure(WORKER_LOST.to_string()))
            }
        }
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            // A panicking worker already shows up as a disconnected channel
            let _ = worker.join();
        }
    }
}

impl Launcher {
    /// Start a run on a worker thread and return immediately
    pub fn run_in_background(&self, bundle_path: impl Into<String>) -> PendingRun {
        let launcher = self.clone();
        let bundle_path = bundle_path.into();
        let (tx, rx) = mpsc::sync_channel(1);

        let spawned = thread::Builder::new()
            .name("mpbrun-launcher".to_string())
            .spawn(move || {
                // The receiver may be gone if the caller dropped the handle
                let _ = tx.send(launcher.run(&bundle_path));
            });

        match spawned {
            Ok(worker) => PendingRun {
                reply: rx,
                worker: Some(worker),
            },
            Err(e) => PendingRun::spawn_failed(&e),
        }
    }
}

impl PendingRun {
    /// A run that never started because no worker thread could be created
    fn spawn_failed(err: &std::io::Error) -> Self {
        let (tx, rx) = mpsc::sync_channel(1);
        // Capacity 1 and the receiver is alive, so this cannot fail
        let _ = tx.send(ExecutionResult::Failure(format!(
            "Failed to start launcher worker: {err}"
        )));
        PendingRun {
            reply: rx,
            worker: None,
        }
    }
}
