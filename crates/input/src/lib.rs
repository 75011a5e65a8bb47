//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Every key
//! press is one discrete action; there is no key repeat handling beyond what
//! the terminal itself delivers.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
