//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management and simulation logic.
//! It has no dependencies on terminals, clocks or I/O:
//!
//! - **Deterministic**: a seeded [`SimpleRng`] replays identical games
//! - **Clock-free**: drivers pass monotonic timestamps to [`GameState::tick`]
//! - **Portable**: runs in a terminal, headless, or under test
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled cells, line detection and compaction
//! - [`pieces`]: shape matrices, clockwise rotation and the seven-shape catalog
//! - [`collision`]: piece-vs-board checks (walls, floor, settled cells)
//! - [`scoring`]: line clear points, level and gravity curve
//! - [`rng`]: where new pieces come from
//! - [`game_state`]: the lifecycle, moves, rotation, locking and gravity
//! - [`snapshot`]: plain copy of the state for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, TickOutcome};
//! use blockfall_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // First tick records the reference time, then gravity needs a full interval.
//! assert_eq!(game.tick(0), TickOutcome::Idle);
//! assert_eq!(game.tick(1000), TickOutcome::Fell);
//!
//! let event = game.hard_drop().unwrap();
//! assert_eq!(event.lines_cleared, 0);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{collides, overlaps};
pub use game_state::{GameState, TickOutcome};
pub use pieces::{catalog, rotate_cw, Piece, Shape, ShapeDef};
pub use rng::{RandSource, SequenceSource, ShapeSource, SimpleRng};
pub use scoring::{calculate_level, calculate_line_score, calculate_score, get_drop_interval_ms, ScoreResult};
pub use snapshot::GameSnapshot;
