//! The progress channel
//!
//! An unbounded FIFO: sending never blocks a job, and events arrive in the
//! order each job sent them.

use crate::update::ProgressEvent;
use tokio::sync::mpsc;

pub fn progress_channel() -> (ProgressSender, ProgressReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ProgressSender(tx), ProgressReceiver(rx))
}

#[derive(Debug, Clone)]
pub struct ProgressSender(mpsc::UnboundedSender<ProgressEvent>);

impl ProgressSender {
    /// Events sent after the receiver is gone are dropped.
    pub fn send(&self, event: ProgressEvent) {
        let _ = self.0.send(event);
    }

    pub fn progress(&self, percent: usize) {
        self.send(ProgressEvent::Progress(percent.min(100) as u8));
    }

    /// Progress as `done` out of `total` steps, scaled into `0..=span` percent
    pub fn progress_of(&self, done: usize, total: usize, span: usize) {
        if total > 0 {
            self.progress(done * span / total);
        }
    }

    pub fn status(&self, message: impl Into<String>) {
        self.send(ProgressEvent::Status(message.into()));
    }

    pub(crate) fn done(&self, message: impl Into<String>) {
        self.send(ProgressEvent::Done(message.into()));
    }

    pub(crate) fn error(&self, message: impl Into<String>) {
        self.send(ProgressEvent::Error(message.into()));
    }
}

#[derive(Debug)]
pub struct ProgressReceiver(mpsc::UnboundedReceiver<ProgressEvent>);

impl ProgressReceiver {
    /// Wait for the next event
    pub async fn recv(&mut self) -> Option<ProgressEvent> {
        self.0.recv().await
    }

    pub fn try_recv(&mut self) -> Option<ProgressEvent> {
        self.0.try_recv().ok()
    }

    /// Every event already queued, oldest first
    pub fn drain(&mut self) -> Vec<ProgressEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}
