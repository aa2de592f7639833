//! HTTP Handlers

mod audio;
mod ping;
mod prompt;

pub use audio::*;
pub use ping::*;
pub use prompt::*;
