pub mod key_value;
pub mod notifier;

pub use key_value::{KeyValueStore, StoreError};
pub use notifier::Notifier;
