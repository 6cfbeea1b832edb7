//! Trigger implementations

mod file_created;

pub use file_created::FileCreatedTrigger;
