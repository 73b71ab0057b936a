pub mod engine;
pub mod path;

pub use engine::{ReceiveQuery, SendQuery};
pub use path::{Path, PathKey};
