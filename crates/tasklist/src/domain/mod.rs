//! Domain facades for task tracking.
//!
//! The manager owns the task collection and keeps it ordered
//! across every mutation.

mod manager;

pub use manager::TaskManager;
