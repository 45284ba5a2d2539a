//! Background Requests
//!
//! Runs service futures on a small tokio runtime and hands results back to
//! the UI thread through a channel that the owning screen polls every frame.
//!
//! Each request carries a [`CancellationToken`]. Dropping the
//! [`PendingRequest`] (which happens when its screen unmounts) cancels the
//! future, so a request that outlives its screen never delivers.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};
use tokio_util::sync::CancellationToken;

/// Identifier of a spawned request, unique per runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TaskId(u64);

/// Result of checking a pending request
#[derive(Debug, PartialEq, Eq)]
pub enum RequestPoll<T> {
    /// Still running
    Pending,
    /// Finished with this output
    Ready(T),
    /// Cancelled or dropped without output
    Cancelled,
}

/// Owns the runtime that executes service futures
pub struct TaskRunner {
    runtime: Runtime,
    next: u64,
}

impl TaskRunner {
    pub fn new() -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("authdeck-requests")
            .enable_time()
            .build()?;
        Ok(Self { runtime, next: 0 })
    }

    fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }

    /// Start `future` in the background.
    pub fn spawn<F, T>(&mut self, future: F) -> PendingRequest<T>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let id = self.next_id();
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let (tx, rx) = channel();

        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!("[TASK] request {} cancelled", id.0);
                }
                output = future => {
                    if tx.send(output).is_err() {
                        tracing::debug!("[TASK] request {} finished after its receiver was dropped", id.0);
                    }
                }
            }
        });

        tracing::debug!("[TASK] request {} spawned", id.0);
        PendingRequest { cancel, rx }
    }
}

/// Handle to one in-flight request; cancels it on drop
#[derive(Debug)]
pub struct PendingRequest<T> {
    cancel: CancellationToken,
    rx: Receiver<T>,
}

impl<T> PendingRequest<T> {
    /// Non-blocking check, called once per frame.
    pub fn try_poll(&self) -> RequestPoll<T> {
        if self.cancel.is_cancelled() {
            return RequestPoll::Cancelled;
        }
        match self.rx.try_recv() {
            Ok(output) => RequestPoll::Ready(output),
            Err(TryRecvError::Empty) => RequestPoll::Pending,
            Err(TryRecvError::Disconnected) => RequestPoll::Cancelled,
        }
    }

    /// Block for up to `timeout` waiting for the output.
    pub fn wait(&self, timeout: Duration) -> RequestPoll<T> {
        if self.cancel.is_cancelled() {
            return RequestPoll::Cancelled;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(output) => RequestPoll::Ready(output),
            Err(RecvTimeoutError::Timeout) => RequestPoll::Pending,
            Err(RecvTimeoutError::Disconnected) => RequestPoll::Cancelled,
        }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl<T> Drop for PendingRequest<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
