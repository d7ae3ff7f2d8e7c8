//! HTTP Handlers

mod chapter;
mod character;
mod novel;
mod ping;

pub use chapter::*;
pub use character::*;
pub use novel::*;
pub use ping::*;
