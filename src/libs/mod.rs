//! Supporting modules for the task store.

pub mod data_storage;
pub mod error;
pub mod task;
