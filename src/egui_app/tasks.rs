//! Background work for the UI thread.
//!
//! Futures run on the shared tokio runtime and post their output back over
//! a `std::sync::mpsc` channel, which `AppState` drains with `try_recv`
//! once per frame.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver, Sender};

use tokio::runtime::Handle;

/// Run `future` on `runtime`, returning the receiver for its output.
pub fn spawn_reply<T, F>(runtime: &Handle, future: F) -> Receiver<T>
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = channel();
    spawn_into(runtime, tx, future);
    rx
}

/// Run `future` on `runtime` and send its output on an existing channel.
pub fn spawn_into<T, F>(runtime: &Handle, tx: Sender<T>, future: F)
where
    F: Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    runtime.spawn(async move {
        if tx.send(future.await).is_err() {
            tracing::debug!("Result receiver dropped before task finished");
        }
    });
}
