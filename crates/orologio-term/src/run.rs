//! The foreground run loop: refreshes the clock until Ctrl+C.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use orologio_core::clock::SystemClock;
use orologio_core::config;
use orologio_core::ticker::Ticker;
use orologio_core::updater::{ClockResult, ClockUpdater};
use orologio_core::{log_error, log_info};

use crate::ctrl_c;
use crate::surface::TermSurface;

/// Message type for the run loop's unified channel.
pub enum RunMsg {
    /// One interval elapsed; refresh the display.
    Tick,
    /// Ctrl+C was pressed; stop and clean up.
    Shutdown,
}

/// Runs the clock in the foreground until Ctrl+C.
///
/// Fails before drawing anything when stdout is not a terminal. The
/// display surface is released (cursor restored, final newline) on
/// every exit path after creation.
pub fn run() -> ClockResult<()> {
    let config = config::load();
    orologio_core::log::init(&config.logging);

    let surface = TermSurface::new()?;
    let mut updater = ClockUpdater::new(surface, SystemClock, config.clock.format.clone());

    log_info!("Clock started (PID: {})", std::process::id());
    log_info!(
        "Config: format=\"{}\", interval_ms={}, log_level={}",
        config.clock.format,
        config.clock.interval_ms,
        config.logging.level
    );

    let (tx, rx) = mpsc::channel::<RunMsg>();

    ctrl_c::set_handler(tx.clone())?;

    // First paint before the ticker starts, so the display is never
    // blank for a full interval.
    updater.tick()?;

    let (tick_tx, tick_rx) = mpsc::channel::<()>();
    let ticker = Ticker::start(Duration::from_millis(config.clock.interval_ms), tick_tx);

    // Bridge: forward ticker beats into the unified channel.
    let bridge_tx = tx.clone();
    let tick_bridge = thread::spawn(move || {
        for () in tick_rx {
            if bridge_tx.send(RunMsg::Tick).is_err() {
                break;
            }
        }
    });

    // Each tick runs to completion before the next message is
    // handled, so writes to the surface never overlap.
    let mut result: ClockResult<()> = Ok(());
    while let Ok(msg) = rx.recv() {
        match msg {
            RunMsg::Tick => {
                if let Err(e) = updater.tick() {
                    log_error!("Display write failed: {e}");
                    result = Err(e);
                    break;
                }
            }
            RunMsg::Shutdown => break,
        }
    }

    log_info!("Clock stopped");

    ticker.stop();
    drop(updater); // restores the cursor via TermSurface::drop
    drop(tx);
    let _ = tick_bridge.join();

    result
}
