mod config;
mod content_disposition;
mod reactive_property;
mod report;
mod states_concurrent;
