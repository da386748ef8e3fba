pub mod domain;
pub mod errors;
pub mod listing;
pub mod ports;
pub mod services;
pub mod timetable;

pub use errors::CoreError;
