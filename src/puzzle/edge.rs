//! Directional colored edge values

use std::fmt;

/// Bit set when an edge points outward (a head rather than a tail)
const DIRECTION_BIT: u8 = 0b100;

/// Low bits carrying the edge color
const COLOR_MASK: u8 = 0b011;

/// Color carried by an edge, two bits of the packed value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Code letter `R`
    Red,
    /// Code letter `B`
    Blue,
    /// Code letter `G`
    Green,
    /// Code letter `Y`
    Yellow,
}

impl Color {
    /// Single-letter code used in puzzle files
    pub const fn code(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Blue => 'B',
            Self::Green => 'G',
            Self::Yellow => 'Y',
        }
    }

    const fn bits(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Blue => 1,
            Self::Green => 2,
            Self::Yellow => 3,
        }
    }
}

/// Which way an edge points across a tile boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Code letter `T`; the direction bit is clear
    Tail,
    /// Code letter `H`; the direction bit is set
    Head,
}

impl Direction {
    /// Single-letter code used in puzzle files
    pub const fn code(self) -> char {
        match self {
            Self::Tail => 'T',
            Self::Head => 'H',
        }
    }

    const fn bits(self) -> u8 {
        match self {
            Self::Tail => 0,
            Self::Head => DIRECTION_BIT,
        }
    }
}

/// A directional colored edge packed into three bits
///
/// Two bits carry the color and one bit the direction, so the match test
/// reduces to a single XOR against the direction bit. Edges are immutable
/// values with structural equality; the default edge is a red tail, the
/// all-zero encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge(u8);

impl Edge {
    /// Red tail, code `RT`
    pub const RED_TAIL: Self = Self::new(Color::Red, Direction::Tail);
    /// Blue tail, code `BT`
    pub const BLUE_TAIL: Self = Self::new(Color::Blue, Direction::Tail);
    /// Green tail, code `GT`
    pub const GREEN_TAIL: Self = Self::new(Color::Green, Direction::Tail);
    /// Yellow tail, code `YT`
    pub const YELLOW_TAIL: Self = Self::new(Color::Yellow, Direction::Tail);
    /// Red head, code `RH`
    pub const RED_HEAD: Self = Self::new(Color::Red, Direction::Head);
    /// Blue head, code `BH`
    pub const BLUE_HEAD: Self = Self::new(Color::Blue, Direction::Head);
    /// Green head, code `GH`
    pub const GREEN_HEAD: Self = Self::new(Color::Green, Direction::Head);
    /// Yellow head, code `YH`
    pub const YELLOW_HEAD: Self = Self::new(Color::Yellow, Direction::Head);

    /// Every edge value, tails before heads in color order
    pub const ALL: [Self; 8] = [
        Self::RED_TAIL,
        Self::BLUE_TAIL,
        Self::GREEN_TAIL,
        Self::YELLOW_TAIL,
        Self::RED_HEAD,
        Self::BLUE_HEAD,
        Self::GREEN_HEAD,
        Self::YELLOW_HEAD,
    ];

    /// Pack a color and direction into an edge
    pub const fn new(color: Color, direction: Direction) -> Self {
        Self(color.bits() | direction.bits())
    }

    /// Parse a two-character code such as `RT` or `YH`
    ///
    /// Returns `None` unless the code is exactly one color letter followed
    /// by one direction letter.
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let color = match chars.next()? {
            'R' => Color::Red,
            'B' => Color::Blue,
            'G' => Color::Green,
            'Y' => Color::Yellow,
            _ => return None,
        };
        let direction = match chars.next()? {
            'T' => Direction::Tail,
            'H' => Direction::Head,
            _ => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(color, direction))
    }

    /// The color carried by this edge
    pub const fn color(self) -> Color {
        match self.0 & COLOR_MASK {
            0 => Color::Red,
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        }
    }

    /// The direction carried by this edge
    pub const fn direction(self) -> Direction {
        if self.0 & DIRECTION_BIT == 0 {
            Direction::Tail
        } else {
            Direction::Head
        }
    }

    /// The unique edge this one joins with: same color, opposite direction
    pub const fn complement(self) -> Self {
        Self(self.0 ^ DIRECTION_BIT)
    }

    /// Test whether two edges join cleanly across a boundary
    ///
    /// Matching edges agree on color and oppose in direction, so their
    /// packed values differ in exactly the direction bit. An edge never
    /// matches itself.
    pub const fn matches(self, other: Self) -> bool {
        self.0 ^ other.0 == DIRECTION_BIT
    }
}

impl Default for Edge {
    fn default() -> Self {
        Self::RED_TAIL
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color().code(), self.direction().code())
    }
}
