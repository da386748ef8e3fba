pub mod artist;
pub mod day;
pub mod draft;
pub mod ids;
pub mod stage;
pub mod want_level;

pub use artist::Artist;
pub use day::Day;
pub use draft::ArtistDraft;
pub use ids::ArtistId;
pub use stage::StageId;
pub use want_level::{WantInput, WantLevel};
