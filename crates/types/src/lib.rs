//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the game rules, the key map and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Speed Curve
//!
//! | Level | Drop interval |
//! |-------|---------------|
//! | 1 | 1000ms |
//! | 2 | 900ms |
//! | ... | -100ms per level |
//! | 10+ | 100ms (floor) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_COLS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_COLS: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speeds up by this much per level
pub const DROP_STEP_MS: u32 = 100;

/// Fastest gravity interval, reached at level 10
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a freshly started game
pub const START_LEVEL: u32 = 1;

/// Line clear scoring table.
///
/// Base points for clearing N lines at once, multiplied by the current level:
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Default frame interval for terminal drivers (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    ///
    /// ```
    /// use blockfall_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#00f0f0"), Some(Rgb::new(0, 240, 240)));
    /// assert_eq!(Rgb::from_hex("00f0f0"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// The seven piece kinds, in catalog order
///
/// Each kind has one fixed shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// Number of piece kinds
    pub const COUNT: usize = 7;

    /// All kinds, indexed by catalog position
    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Map a catalog index (0..7) to its kind
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Catalog index of this kind
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// The fixed color token of this kind
    pub const fn color(&self) -> Rgb {
        match self {
            PieceKind::I => Rgb::new(0x00, 0xf0, 0xf0),
            PieceKind::O => Rgb::new(0xf0, 0xf0, 0x00),
            PieceKind::T => Rgb::new(0xa0, 0x00, 0xf0),
            PieceKind::L => Rgb::new(0xf0, 0xa0, 0x00),
            PieceKind::J => Rgb::new(0x00, 0x00, 0xf0),
            PieceKind::S => Rgb::new(0x00, 0xf0, 0x00),
            PieceKind::Z => Rgb::new(0xf0, 0x00, 0x00),
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Upper-case letter, as shown by the terminal view
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Settled cell, tagged with the kind that locked it
pub type Cell = Option<PieceKind>;

/// Lifecycle phase of a game
///
/// ```text
/// NotStarted --start--> Running <--toggle--> Paused
///                          |
///                   spawn blocked
///                          v
///                        Over --start--> Running
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Paused,
    Over,
}

impl Phase {
    /// camelCase name, as written to the log
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "notStarted",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Over => "over",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Drivers map raw input onto these; each maps to one game operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece to the lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise (with horizontal kicks)
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a new game (restarts when one is in progress)
    Start,
}

impl GameAction {
    /// camelCase name, as written to the log
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
        }
    }
}

/// Event emitted when a piece locks.
///
/// `cleared_rows` lists the removed row indices (bottom to top) in its first
/// `lines_cleared` entries; a piece spans at most four rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub cleared_rows: [u8; 4],
    pub score_delta: u32,
    pub game_over: bool,
}

impl LockEvent {
    /// The removed row indices
    pub fn cleared_rows(&self) -> &[u8] {
        let n = (self.lines_cleared as usize).min(self.cleared_rows.len());
        &self.cleared_rows[..n]
    }
}
