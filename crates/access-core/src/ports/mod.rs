//! Port traits implemented by collaborators outside the core

pub mod session_source;

pub use session_source::SessionSource;
