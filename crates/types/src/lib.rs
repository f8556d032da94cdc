//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, session timing, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is fixed:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (5, 0), horizontal center of the top row
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAMES_PER_SECOND` | 60 | Fixed timestep rate of the outer loop |
//! | `STANDARD_TURN_MS` | 600 | Descend interval without soft drop |
//! | `QUICK_TURN_MS` | 100 | Descend interval while soft drop is held |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Held-key timeout for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Action, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.rotation_count(), 4);
//!
//! let action = Action::from_str("rotateCcw").unwrap();
//! assert_eq!(action, Action::RotateCcw);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Logical frames per second driven by the outer loop
pub const FRAMES_PER_SECOND: u32 = 60;

/// Descend interval while no soft-drop key is held
pub const STANDARD_TURN_MS: u32 = 600;

/// Descend interval while a soft-drop key is held
pub const QUICK_TURN_MS: u32 = 100;

/// Held-key timeout used when the terminal never reports key releases.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Full-scale music volume.
pub const DEFAULT_MUSIC_VOLUME: f32 = 1.0;

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
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Rgb)`: Cell locked with the color of the piece that filled it
pub type Cell = Option<Rgb>;

/// The seven piece kinds
///
/// Each kind has a fixed display color:
/// - **O**: Yellow, 2x2 square
/// - **I**: Cyan, straight bar
/// - **T**: Purple, T-shaped
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Kind at `index` in [`PieceKind::ALL`], wrapping out-of-range values.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
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
            "o" => Some(PieceKind::O),
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Display color painted into the grid when a piece of this kind locks.
    pub const fn color(self) -> Rgb {
        match self {
            PieceKind::O => Rgb::new(255, 255, 0),
            PieceKind::I => Rgb::new(0, 255, 255),
            PieceKind::T => Rgb::new(127, 2, 122),
            PieceKind::J => Rgb::new(0, 0, 255),
            PieceKind::L => Rgb::new(253, 128, 44),
            PieceKind::S => Rgb::new(0, 255, 0),
            PieceKind::Z => Rgb::new(255, 0, 0),
        }
    }

    /// Number of distinct rotation states.
    ///
    /// O has a single state; I, S and Z toggle between two; T, J and L have four.
    pub const fn rotation_count(self) -> u8 {
        match self {
            PieceKind::O => 1,
            PieceKind::I | PieceKind::S | PieceKind::Z => 2,
            PieceKind::T | PieceKind::J | PieceKind::L => 4,
        }
    }
}

/// Discrete actions offered to the engine
///
/// The set is closed: input mapping, the turn timer and tests all speak in
/// terms of these five values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the piece one row down; locks the piece when blocked
    Descend,
    /// Move the piece one column right
    MoveRight,
    /// Move the piece one column left
    MoveLeft,
    /// Advance to the next rotation state
    RotateCw,
    /// Step back to the previous rotation state
    RotateCcw,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Descend,
        Action::MoveRight,
        Action::MoveLeft,
        Action::RotateCw,
        Action::RotateCcw,
    ];

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Action;
    ///
    /// assert_eq!(Action::from_str("moveLeft"), Some(Action::MoveLeft));
    /// assert_eq!(Action::from_str("descend"), Some(Action::Descend));
    /// assert_eq!(Action::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "descend" => Some(Action::Descend),
            "moveright" => Some(Action::MoveRight),
            "moveleft" => Some(Action::MoveLeft),
            "rotatecw" => Some(Action::RotateCw),
            "rotateccw" => Some(Action::RotateCcw),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Descend => "descend",
            Action::MoveRight => "moveRight",
            Action::MoveLeft => "moveLeft",
            Action::RotateCw => "rotateCw",
            Action::RotateCcw => "rotateCcw",
        }
    }
}
