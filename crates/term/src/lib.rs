//! Terminal rendering for the game.
//!
//! A small game-oriented layer instead of a widget toolkit: [`GameView`] lays a
//! [`GameSnapshot`](crate::core::GameSnapshot) out into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes the changed parts of it through `crossterm`.
//! Board cells are two columns wide to compensate for glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{AnchorY, BoardRect, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
