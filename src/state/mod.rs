/// State management module
///
/// This module holds all in-memory session state:
/// - Dataset, location and draft data structures (data.rs)
/// - Per-target optical/thermal flags (view_mode.rs)
/// - The "add target" dialog and its draft (draft.rs)

pub mod data;
pub mod draft;
pub mod view_mode;

pub use data::{Dataset, Location, TargetDraft};
pub use draft::{DraftField, TargetDraftController};
pub use view_mode::ViewModeStore;
