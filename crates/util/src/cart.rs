//! Cart badge counting.
//!
//! The cart lives in local storage under [`CART_STORAGE_KEY`] as a JSON object
//! of item identifier to quantity. This module only reads it. The badge shows
//! the number of distinct items, not the summed quantities.
//!
//! [`CartCounter`] reads the entry once on start and then on a fixed interval,
//! publishing the count through a `watch` channel. Stopping the counter
//! cancels the interval and waits for the task, so no read happens after
//! teardown.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::local_storage::LocalStorage;

/// Local storage key holding the cart document.
pub const CART_STORAGE_KEY: &str = "cart";

/// Count distinct items in a raw cart document.
///
/// Absent, empty, non-object and unparsable documents all count as an empty
/// cart.
pub fn distinct_item_count(raw: Option<&str>) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return 0;
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(entries)) => entries.len(),
        Ok(_) => {
            warn!("Cart entry is not a JSON object; treating it as empty");
            0
        }
        Err(error) => {
            warn!(error = %error, "Cart entry is not valid JSON; treating it as empty");
            0
        }
    }
}

/// Read the cart entry from storage and count its distinct items.
pub fn read_cart_count(storage: &dyn LocalStorage) -> usize {
    match storage.get_item(CART_STORAGE_KEY) {
        Ok(raw) => distinct_item_count(raw.as_deref()),
        Err(error) => {
            warn!(error = %error, "Failed to read cart storage; treating it as empty");
            0
        }
    }
}

/// Polling reader that keeps the cart badge count current.
#[derive(Debug)]
pub struct CartCounter {
    receiver: watch::Receiver<usize>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl CartCounter {
    /// Read the cart once, then spawn the recurring read on the current Tokio
    /// runtime.
    pub fn start(storage: Arc<dyn LocalStorage>, interval: Duration) -> Self {
        let initial = read_cart_count(storage.as_ref());
        let (sender, receiver) = watch::channel(initial);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(poll_cart(storage, interval, sender, cancel.clone()));
        debug!(initial, interval_ms = interval.as_millis() as u64, "cart counter started");
        Self {
            receiver,
            cancel,
            task: Some(task),
        }
    }

    /// Most recently observed distinct-item count.
    pub fn count(&self) -> usize {
        *self.receiver.borrow()
    }

    /// A receiver that is notified whenever the count changes.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.receiver.clone()
    }

    /// Cancel the recurring read and wait for the polling task to finish.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take()
            && let Err(error) = task.await
            && !error.is_cancelled()
        {
            warn!(error = %error, "cart counter task ended abnormally");
        }
    }
}

impl Drop for CartCounter {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn poll_cart(storage: Arc<dyn LocalStorage>, interval: Duration, sender: watch::Sender<usize>, cancel: CancellationToken) {
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                // Synchronous read on the runtime thread; the entry is a small
                // file read at most once per interval.
                let count = read_cart_count(storage.as_ref());
                sender.send_if_modified(|current| {
                    if *current == count {
                        return false;
                    }
                    *current = count;
                    true
                });
            }
        }
    }
    debug!("cart counter stopped");
}
