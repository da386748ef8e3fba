pub mod schedule_service;
pub mod seed;

pub use schedule_service::{ARTISTS_KEY, ScheduleService};
