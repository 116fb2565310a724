//! Command result rendering.

pub mod list;
pub mod sync;
