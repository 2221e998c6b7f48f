mod store;
mod types;

pub use store::{SessionStore, SharedSession};
pub use types::Session;
