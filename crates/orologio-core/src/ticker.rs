//! Periodic tick scheduling for the clock display.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

/// A cancellable periodic tick thread.
///
/// Sends `()` on a channel after every interval until stopped. The
/// receiving loop decides what a tick means; ticks never overlap
/// because a single receiver handles them one at a time.
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the tick thread.
    ///
    /// The first tick arrives one interval after this call; callers
    /// that want an immediate first refresh perform it themselves
    /// before starting the ticker. The thread also exits when the
    /// receiving end of `tx` is dropped.
    pub fn start(interval: Duration, tx: Sender<()>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        let handle = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                thread::sleep(interval);
                // Re-check after sleeping so a stop that landed during
                // the sleep suppresses the pending tick.
                if flag.load(Ordering::Relaxed) || tx.send(()).is_err() {
                    break;
                }
            }
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stops the tick thread and waits for it to exit.
    ///
    /// No tick is delivered after this returns. Latency is bounded by
    /// one interval (the thread may be mid-sleep).
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn ticker_delivers_ticks() {
        // Arrange
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::start(Duration::from_millis(5), tx);

        // Act
        let first = rx.recv_timeout(Duration::from_secs(2));
        let second = rx.recv_timeout(Duration::from_secs(2));

        // Assert
        assert!(first.is_ok());
        assert!(second.is_ok());
        ticker.stop();
    }

    #[test]
    fn stop_halts_delivery() {
        // Arrange
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::start(Duration::from_millis(5), tx);
        let _ = rx.recv_timeout(Duration::from_secs(2));

        // Act
        ticker.stop();

        // Assert: drain anything sent before the stop landed, then the
        // channel must be disconnected — the sender is gone.
        while rx.try_recv().is_ok() {}
        assert_eq!(rx.try_recv(), Err(mpsc::TryRecvError::Disconnected));
    }

    #[test]
    fn ticker_exits_when_receiver_is_dropped() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::start(Duration::from_millis(5), tx);
        drop(rx);

        // stop() joins the thread; if the send-error path did not
        // break the loop this would hang instead of returning.
        ticker.stop();
    }

    #[test]
    fn dropping_a_ticker_stops_it() {
        let (tx, rx) = mpsc::channel();
        {
            let _ticker = Ticker::start(Duration::from_millis(5), tx);
            let _ = rx.recv_timeout(Duration::from_secs(2));
        }
        while rx.try_recv().is_ok() {}
        assert_eq!(rx.try_recv(), Err(mpsc::TryRecvError::Disconnected));
    }
}
