//! Terminal and NDJSON rendering for the `ssh-sftp` binary.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod live_region;
pub mod output;
pub mod primitives;
pub mod progress;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
