pub(crate) mod auth;
pub(crate) mod config;
pub(crate) mod downloader;
pub(crate) mod entrance;
pub(crate) mod error;
pub(crate) mod report;
pub(crate) mod states;
pub(crate) mod task_tracker;
