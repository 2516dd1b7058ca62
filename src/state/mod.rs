pub mod announcer;
pub mod call_log;
pub mod drag;
pub mod modal;
pub mod nav;
pub mod steps;

pub use announcer::{AnnounceAction, Announcement};
pub use call_log::{CallLog, LOG_PLACEHOLDER, LogEntry};
pub use drag::{Bounds, DRAG_FORMAT, DropHighlight, HighlightAction, drop_request};
pub use modal::{ModalAction, ModalContent, ModalExample, ModalPhase, ModalState};
pub use steps::{Step, StepStatus};
