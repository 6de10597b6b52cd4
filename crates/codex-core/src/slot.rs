//! Board coordinates and directions.
//!
//! This module provides the coordinate types for a player's grid:
//! - `BoardSlot`: identifies one cell of the infinite grid
//! - `CornerDirection`: the four corners a card links through
//! - `RelativeDirection`: the eight planar neighbors of a card
//!
//! Slots use diagonal addressing. Cards sharing a corner are one diagonal step
//! apart, at `(±1, ±1)`. A card directly above another one sits two steps up,
//! at `(0, +2)`, because it is reached through two corner links. `v` grows
//! upwards and `h` grows to the right.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything that moves a slot by a fixed offset.
pub trait SlotOffset: Copy {
    /// `(dh, dv)` added to a slot when moving in this direction
    fn offset(self) -> (i32, i32);
}

/// One of the four corners of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CornerDirection {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl CornerDirection {
    /// All corners, clockwise from top-right
    pub const ALL: [CornerDirection; 4] = [
        CornerDirection::TopRight,
        CornerDirection::BottomRight,
        CornerDirection::BottomLeft,
        CornerDirection::TopLeft,
    ];

    /// Position of this corner inside a face's corner array
    pub const fn index(self) -> usize {
        match self {
            CornerDirection::TopRight => 0,
            CornerDirection::BottomRight => 1,
            CornerDirection::BottomLeft => 2,
            CornerDirection::TopLeft => 3,
        }
    }

    /// The corner diagonally across the card
    pub const fn opposite(self) -> Self {
        match self {
            CornerDirection::TopRight => CornerDirection::BottomLeft,
            CornerDirection::BottomRight => CornerDirection::TopLeft,
            CornerDirection::BottomLeft => CornerDirection::TopRight,
            CornerDirection::TopLeft => CornerDirection::BottomRight,
        }
    }
}

impl SlotOffset for CornerDirection {
    fn offset(self) -> (i32, i32) {
        match self {
            CornerDirection::TopRight => (1, 1),
            CornerDirection::BottomRight => (1, -1),
            CornerDirection::BottomLeft => (-1, -1),
            CornerDirection::TopLeft => (-1, 1),
        }
    }
}

/// One of the eight planar neighbors of a card.
///
/// Diagonal neighbors share a corner with the card. Straight neighbors are
/// two corner links away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeDirection {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl RelativeDirection {
    /// All directions, clockwise from up
    pub const ALL: [RelativeDirection; 8] = [
        RelativeDirection::Up,
        RelativeDirection::UpRight,
        RelativeDirection::Right,
        RelativeDirection::DownRight,
        RelativeDirection::Down,
        RelativeDirection::DownLeft,
        RelativeDirection::Left,
        RelativeDirection::UpLeft,
    ];

    pub const fn opposite(self) -> Self {
        match self {
            RelativeDirection::Up => RelativeDirection::Down,
            RelativeDirection::UpRight => RelativeDirection::DownLeft,
            RelativeDirection::Right => RelativeDirection::Left,
            RelativeDirection::DownRight => RelativeDirection::UpLeft,
            RelativeDirection::Down => RelativeDirection::Up,
            RelativeDirection::DownLeft => RelativeDirection::UpRight,
            RelativeDirection::Left => RelativeDirection::Right,
            RelativeDirection::UpLeft => RelativeDirection::DownRight,
        }
    }

    /// The corner this direction passes through, for diagonal directions
    pub const fn as_corner(self) -> Option<CornerDirection> {
        match self {
            RelativeDirection::UpRight => Some(CornerDirection::TopRight),
            RelativeDirection::DownRight => Some(CornerDirection::BottomRight),
            RelativeDirection::DownLeft => Some(CornerDirection::BottomLeft),
            RelativeDirection::UpLeft => Some(CornerDirection::TopLeft),
            _ => None,
        }
    }
}

impl From<CornerDirection> for RelativeDirection {
    fn from(corner: CornerDirection) -> Self {
        match corner {
            CornerDirection::TopRight => RelativeDirection::UpRight,
            CornerDirection::BottomRight => RelativeDirection::DownRight,
            CornerDirection::BottomLeft => RelativeDirection::DownLeft,
            CornerDirection::TopLeft => RelativeDirection::UpLeft,
        }
    }
}

impl SlotOffset for RelativeDirection {
    fn offset(self) -> (i32, i32) {
        match self {
            RelativeDirection::Up => (0, 2),
            RelativeDirection::Right => (2, 0),
            RelativeDirection::Down => (0, -2),
            RelativeDirection::Left => (-2, 0),
            diagonal => match diagonal.as_corner() {
                Some(corner) => corner.offset(),
                None => (0, 0),
            },
        }
    }
}

/// A cell of the player's grid.
///
/// `(0, 0)` holds the starter card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct BoardSlot {
    /// Horizontal coordinate (increases to the right)
    pub h: i32,
    /// Vertical coordinate (increases upwards)
    pub v: i32,
}

impl BoardSlot {
    /// The slot holding the starter card
    pub const ROOT: BoardSlot = BoardSlot::new(0, 0);

    /// Create a new slot
    pub const fn new(h: i32, v: i32) -> Self {
        Self { h, v }
    }

    /// Whether this is the starter card's slot
    pub fn is_root(&self) -> bool {
        *self == Self::ROOT
    }

    /// The slot one move away in the given direction
    pub fn slot_at<D: SlotOffset>(&self, direction: D) -> BoardSlot {
        let (dh, dv) = direction.offset();
        BoardSlot::new(self.h + dh, self.v + dv)
    }

    /// The four corner-sharing neighbors, in `CornerDirection::ALL` order
    pub fn corner_neighbors(&self) -> [BoardSlot; 4] {
        CornerDirection::ALL.map(|corner| self.slot_at(corner))
    }

    /// The corner of `self` that touches `other`, if the two share a corner
    pub fn corner_towards(&self, other: &BoardSlot) -> Option<CornerDirection> {
        CornerDirection::ALL
            .into_iter()
            .find(|&corner| self.slot_at(corner) == *other)
    }

    /// Whether `h + v` is even. Only such slots can ever hold a card.
    pub fn is_on_lattice(&self) -> bool {
        (self.h + self.v) % 2 == 0
    }
}

impl fmt::Display for BoardSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.h, self.v)
    }
}
