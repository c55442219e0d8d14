//! Ctrl+C handling for the foreground clock.

use std::sync::mpsc::Sender;

use crate::run::RunMsg;

/// Registers a Ctrl+C handler that sends [`RunMsg::Shutdown`] on the
/// given channel.
///
/// The run loop exits on the first shutdown message; signals after
/// that have no further effect. Registration can only happen once per
/// process.
pub fn set_handler(tx: Sender<RunMsg>) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        let _ = tx.send(RunMsg::Shutdown);
    })
}
