//! Moore-neighbourhood slot layout.
//!
//! Every neighbourhood query fills an eight-slot [`Connections`] array.
//! The slot numbering runs clockwise from the top-left corner:
//!
//! ```text
//!   0 1 2
//!   7 · 3
//!   6 5 4
//! ```
//!
//! Callers index into the array by slot number, so the mapping from
//! [`ConnectionIndex`] to array position is part of the public contract
//! and must never be reordered.

use std::f32::consts::SQRT_2;
use std::fmt;

/// Number of slots in a Moore neighbourhood.
pub const CONNECTION_COUNT: usize = 8;

/// One value per neighbourhood slot, indexed by [`ConnectionIndex::index`].
pub type Connections = [f32; CONNECTION_COUNT];

/// Position of a neighbour relative to the centre cell.
///
/// `y` grows downward, so "top" is row `y - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ConnectionIndex {
    /// `(x - 1, y - 1)`.
    TopLeft = 0,
    /// `(x, y - 1)`.
    TopMiddle = 1,
    /// `(x + 1, y - 1)`.
    TopRight = 2,
    /// `(x + 1, y)`.
    MiddleRight = 3,
    /// `(x + 1, y + 1)`.
    BottomRight = 4,
    /// `(x, y + 1)`.
    BottomMiddle = 5,
    /// `(x - 1, y + 1)`.
    BottomLeft = 6,
    /// `(x - 1, y)`.
    MiddleLeft = 7,
}

impl ConnectionIndex {
    /// All eight slots in array order.
    pub const ALL: [ConnectionIndex; CONNECTION_COUNT] = [
        ConnectionIndex::TopLeft,
        ConnectionIndex::TopMiddle,
        ConnectionIndex::TopRight,
        ConnectionIndex::MiddleRight,
        ConnectionIndex::BottomRight,
        ConnectionIndex::BottomMiddle,
        ConnectionIndex::BottomLeft,
        ConnectionIndex::MiddleLeft,
    ];

    /// Array position of this slot within [`Connections`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Slot at array position `index`, or `None` if `index >= 8`.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CONNECTION_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// `(dx, dy)` offset from the centre cell to this neighbour.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::TopLeft => (-1, -1),
            Self::TopMiddle => (0, -1),
            Self::TopRight => (1, -1),
            Self::MiddleRight => (1, 0),
            Self::BottomRight => (1, 1),
            Self::BottomMiddle => (0, 1),
            Self::BottomLeft => (-1, 1),
            Self::MiddleLeft => (-1, 0),
        }
    }

    /// `true` for the four corner slots.
    pub const fn is_diagonal(self) -> bool {
        // Corners sit on the even slots of the clockwise layout.
        self.index() % 2 == 0
    }

    /// Euclidean distance from the centre cell: 1 orthogonally, √2 diagonally.
    pub fn distance(self) -> f32 {
        if self.is_diagonal() {
            SQRT_2
        } else {
            1.0
        }
    }

    /// The slot under which the centre cell appears when viewed from this neighbour.
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + CONNECTION_COUNT / 2) % CONNECTION_COUNT]
    }
}

impl fmt::Display for ConnectionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TopLeft => "top-left",
            Self::TopMiddle => "top-middle",
            Self::TopRight => "top-right",
            Self::MiddleRight => "middle-right",
            Self::BottomRight => "bottom-right",
            Self::BottomMiddle => "bottom-middle",
            Self::BottomLeft => "bottom-left",
            Self::MiddleLeft => "middle-left",
        };
        f.write_str(name)
    }
}
