//! Taskdeck library - task records, the task store, and its persistence

pub mod cli;
pub mod config;
pub mod store;
