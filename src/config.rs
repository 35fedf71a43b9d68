use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One `(left, right)` line per step.
    Pairs,
    /// The whole keypad per step with the fingers drawn as `L` and `R`.
    Keypad,
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Format::Pairs => write!(f, "pairs"),
            Format::Keypad => write!(f, "keypad"),
        }
    }
}
