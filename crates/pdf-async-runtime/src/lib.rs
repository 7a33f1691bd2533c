//! Background jobs for the PDF tools
//!
//! Front ends build a [`JobCommand`] and hand it to a [`JobRunner`], which
//! validates it, claims the job slot for its [`JobKind`] and runs it on the
//! tokio runtime. The job reports back through a [`ProgressReceiver`] the
//! front end drains on its own schedule.

mod channel;
mod command;
mod error;
mod jobs;
mod runner;
mod update;

pub use channel::{ProgressReceiver, ProgressSender, progress_channel};
pub use command::{JobCommand, JobKind};
pub use error::{JobError, Result};
pub use runner::{JobRejected, JobRunner};
pub use update::{LoadedPage, Placement, ProgressEvent};

// Re-export types from library crates
pub use pdf_organize::{PageRef, PageRenderer, RenderedPage};
pub use pdf_stamp::{ImageWatermark, PageNumberOptions, Rgb, TextWatermark, WatermarkSpec};
