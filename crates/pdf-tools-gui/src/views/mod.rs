pub mod about;
pub mod log_panel;
pub mod merge;
pub mod organize;
pub mod protect;
pub mod split;
pub mod watermark;

pub use about::show_about;
pub use log_panel::show_log;
pub use merge::{MergeState, show_merge};
pub use organize::{OrganizeState, show_organize};
pub use protect::{ProtectState, show_protect};
pub use split::{SplitState, show_split};
pub use watermark::{WatermarkState, show_watermark};
