//! Progress reporting port.
//!
//! The pipeline reports human-readable status strings through this trait and
//! never waits on the receiver.

use tokio::sync::mpsc;

/// Receives status messages while a presentation is being generated.
pub trait ProgressReporter: Send + Sync {
    /// Report a status message. Must return promptly.
    fn report(&self, message: &str);
}

impl<F> ProgressReporter for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message);
    }
}

/// Discards every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _message: &str) {}
}

/// Forwards messages into a bounded channel, dropping them when it is full.
#[derive(Debug, Clone)]
pub struct ChannelProgress {
    tx: mpsc::Sender<String>,
}

impl ChannelProgress {
    /// Wrap the sending half of a channel.
    pub const fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }
}

impl ProgressReporter for ChannelProgress {
    fn report(&self, message: &str) {
        if let Err(e) = self.tx.try_send(message.to_string()) {
            tracing::debug!("progress message dropped: {e}");
        }
    }
}
