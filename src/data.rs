use std::fmt::{self, Display, Formatter};

/// Rows and columns are stored as u8.
pub(crate) const MAX_SIZE: usize = 255;

pub type Symbol = char;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    /// Euclidean distance.
    pub fn dist(self, other: Pos) -> f64 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dc = i32::from(self.c) - i32::from(other.c);
        // square as integers first so the result matches sqrt of the exact sum
        f64::from(dr * dr + dc * dc).sqrt()
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

/// A symbol resolved to its position on a keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub symbol: Symbol,
    pub pos: Pos,
}

impl Key {
    pub fn new(symbol: Symbol, pos: Pos) -> Self {
        Key { symbol, pos }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Which finger presses the next digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agent {
    Left,
    Right,
}

impl Display for Agent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Agent::Left => write!(f, "L"),
            Agent::Right => write!(f, "R"),
        }
    }
}
