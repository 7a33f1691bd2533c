//! What the user sees of running jobs: the progress bar, the status line
//! and the notice shown when a job ends.

use pdf_async_runtime::{JobCommand, JobRunner, ProgressEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Feedback {
    /// `0.0..=1.0`
    pub progress: f32,
    pub status: String,
    pub notice: Option<Notice>,
}

impl Feedback {
    /// Start `command`; a rejected command is reported as a failure notice.
    pub fn submit(&mut self, runner: &JobRunner, command: JobCommand) -> bool {
        let kind = command.kind();
        match runner.submit(command) {
            Ok(()) => {
                self.status = format!("{kind:?} started...");
                true
            }
            Err(e) => {
                log::warn!("{kind:?} job rejected: {e}");
                self.fail(e.to_string());
                false
            }
        }
    }

    /// Apply a status event. Returns the event back when it carries a
    /// result for a view to consume.
    pub fn apply(&mut self, event: ProgressEvent) -> Option<ProgressEvent> {
        match event {
            ProgressEvent::Progress(percent) => {
                self.progress = f32::from(percent.min(100)) / 100.0;
            }
            ProgressEvent::Status(message) => self.status = message,
            ProgressEvent::Done(message) => {
                self.progress = 0.0;
                self.status = message.clone();
                self.notice = Some(Notice {
                    kind: NoticeKind::Success,
                    message,
                });
            }
            ProgressEvent::Error(message) => self.fail(message),
            other => return Some(other),
        }
        None
    }

    fn fail(&mut self, message: String) {
        self.progress = 0.0;
        self.status = format!("Error: {message}");
        self.notice = Some(Notice {
            kind: NoticeKind::Failure,
            message,
        });
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}
