pub mod io;

pub use io::{atomic_write_str, read_to_string_opt};
