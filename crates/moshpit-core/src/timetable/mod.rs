pub mod grid;
pub mod layout;
pub mod time;

pub use grid::{StageEntry, TimetableGrid};
pub use layout::{BlockTier, Placement, Span, compute_span};
pub use time::to_minutes;
