//! Presentation Layer
//!
//! - `cli` - Argument parsing (clap)
//! - `factory` - Use cases wired to infrastructure (dependency injection)
//!
//! Rendering lives in the binary (`src/ui/`).

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_preview_use_case, create_prompt, create_sync_executor};
