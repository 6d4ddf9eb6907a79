//! Run async work to completion from blocking code.
//!
//! Each call spawns one dedicated OS thread that owns a fresh current-thread
//! tokio runtime, drives the future on it and exits. The caller blocks on
//! the join. Because the runtime belongs to the worker, calling these from
//! inside another runtime does not nest `block_on` calls.
//!
//! No pooling, no cancellation, no timeout. A panic inside the future is
//! caught at the join and returned as [`BridgeError::WorkerPanicked`].

use std::any::Any;
use std::future::Future;
use std::thread;

const WORKER_NAME: &str = "snmpsim-bridge";

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("failed to spawn bridge worker: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to build worker runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("bridge worker panicked: {0}")]
    WorkerPanicked(String),
}

/// Fire-and-wait: run `future` on an isolated worker and wait for it.
pub fn run_in_new_runtime<F>(future: F) -> Result<(), BridgeError>
where
    F: Future<Output = ()> + Send + 'static,
{
    run_in_new_runtime_with_return(future)
}

/// Fire-and-return: run `future` on an isolated worker and hand back its
/// output once the worker has fully finished.
pub fn run_in_new_runtime_with_return<F, T>(future: F) -> Result<T, BridgeError>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handle = thread::Builder::new()
        .name(WORKER_NAME.to_string())
        .spawn(move || -> Result<T, BridgeError> {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(BridgeError::Runtime)?;
            tracing::trace!("bridge worker started");
            Ok(rt.block_on(future))
        })
        .map_err(BridgeError::Spawn)?;

    match handle.join() {
        Ok(result) => {
            tracing::trace!(ok = result.is_ok(), "bridge worker joined");
            result
        }
        Err(payload) => {
            let msg = panic_message(payload.as_ref());
            tracing::error!(error = %msg, "bridge worker panicked");
            Err(BridgeError::WorkerPanicked(msg))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
