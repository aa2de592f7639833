//! Command Handlers 实现

mod audio_handlers;
mod prompt_handlers;

pub use audio_handlers::*;
pub use prompt_handlers::*;
