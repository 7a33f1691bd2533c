//! Job runner
//!
//! Each job runs as its own tokio task. A second task awaits it and turns
//! its outcome (success, error or panic) into exactly one terminal event.
//! The job's slot is released before that event is sent, so a front end may
//! resubmit as soon as it sees it.

use crate::channel::ProgressSender;
use crate::command::{JobCommand, JobKind};
use crate::error::Result;
use crate::jobs;
use pdf_organize::PageRenderer;
use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tokio::runtime::Handle;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobRejected {
    #[error("A {0:?} job is already running")]
    Busy(JobKind),
    #[error("{0}")]
    Invalid(String),
}

type BusySet = Arc<Mutex<HashSet<JobKind>>>;

/// Marks a [`JobKind`] busy until dropped
struct JobSlot {
    kind: JobKind,
    busy: BusySet,
}

impl JobSlot {
    fn claim(busy: &BusySet, kind: JobKind) -> Option<Self> {
        let mut set = busy.lock().unwrap_or_else(PoisonError::into_inner);
        set.insert(kind).then(|| Self {
            kind,
            busy: busy.clone(),
        })
    }
}

impl Drop for JobSlot {
    fn drop(&mut self) {
        self.busy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.kind);
    }
}

pub struct JobRunner {
    handle: Handle,
    events: ProgressSender,
    renderer: Option<Arc<dyn PageRenderer>>,
    busy: BusySet,
}

impl JobRunner {
    pub fn new(handle: Handle, events: ProgressSender) -> Self {
        Self {
            handle,
            events,
            renderer: None,
            busy: BusySet::default(),
        }
    }

    /// Use `renderer` for thumbnails and previews. Without one, pages load
    /// without thumbnails and previews fail.
    pub fn with_renderer(mut self, renderer: Arc<dyn PageRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    pub fn is_busy(&self, kind: JobKind) -> bool {
        self.busy
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&kind)
    }

    /// Validate `command` and start it, unless a job of the same kind is
    /// still running.
    pub fn submit(&self, command: JobCommand) -> std::result::Result<(), JobRejected> {
        command.validate().map_err(JobRejected::Invalid)?;
        let renderer = self.renderer.clone();
        log::info!("Starting {:?} job", command.kind());
        self.submit_with(command.kind(), move |events| {
            jobs::run(command, events, renderer)
        })
    }

    /// Run an arbitrary job in the slot for `kind`. The job's `Ok` value
    /// becomes the `Done` message.
    pub fn submit_with<F, Fut>(&self, kind: JobKind, job: F) -> std::result::Result<(), JobRejected>
    where
        F: FnOnce(ProgressSender) -> Fut,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        let slot = JobSlot::claim(&self.busy, kind).ok_or(JobRejected::Busy(kind))?;
        let events = self.events.clone();
        let task = self.handle.spawn(job(events.clone()));

        self.handle.spawn(async move {
            let outcome = task.await;
            drop(slot);
            match outcome {
                Ok(Ok(message)) => {
                    log::info!("{kind:?} job finished: {message}");
                    events.done(message);
                }
                Ok(Err(e)) => {
                    log::error!("{kind:?} job failed: {e}");
                    events.error(e.to_string());
                }
                Err(e) => {
                    log::error!("{kind:?} job aborted: {e}");
                    events.error(format!("Job aborted: {e}"));
                }
            }
        });

        Ok(())
    }
}
