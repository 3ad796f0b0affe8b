use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

/// Trailing-fire debouncer for typed queries.
///
/// Holds at most one pending timer. Each `schedule` call aborts the timer
/// and restarts the quiescence countdown, so only the last input in a burst
/// is delivered. Delivery goes through a channel rather than a direct call,
/// which keeps the debounced pathway's identity stable while the receiving
/// end decides what "search" currently means.
pub struct Debouncer {
    quiescence: Duration,
    tx: UnboundedSender<String>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(quiescence: Duration, tx: UnboundedSender<String>) -> Self {
        Debouncer {
            quiescence,
            tx,
            pending: Mutex::new(None),
        }
    }

    /// Restart the quiescence timer for `input`. The input is delivered only
    /// if no further `schedule` or `cancel` happens within the window.
    pub fn schedule(&self, input: String) {
        let mut pending = self.pending.lock().unwrap();
        if let Some(timer) = pending.take() {
            timer.abort();
        }

        let tx = self.tx.clone();
        let quiescence = self.quiescence;
        *pending = Some(tokio::spawn(async move {
            sleep(quiescence).await;
            // The receiver only goes away on shutdown; a failed send is moot.
            let _ = tx.send(input);
        }));
    }

    /// Abort the pending timer, if any. Aborting a timer that already
    /// delivered is a no-op.
    pub fn cancel(&self) {
        if let Some(timer) = self.pending.lock().unwrap().take() {
            timer.abort();
        }
    }
}
