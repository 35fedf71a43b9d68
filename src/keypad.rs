use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use fnv::FnvHashMap;

use crate::data::{Agent, Key, Pos, Symbol};
use crate::parser::{self, ParserErr};
use crate::vec2d::Vec2d;

/// Push button telephone, fingers start on `*` and `#`.
pub const STANDARD_LAYOUT: &str = "
123
456
789
*0#
";

#[derive(Clone, Copy)]
pub struct KeypadFormatter<'a> {
    keypad: &'a Keypad,
    left: Symbol,
    right: Symbol,
}

impl<'a> KeypadFormatter<'a> {
    pub(crate) fn new(keypad: &'a Keypad, left: Symbol, right: Symbol) -> Self {
        Self {
            keypad,
            left,
            right,
        }
    }
}

impl Display for KeypadFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fingers = self.keypad.grid.scratchpad(None);
        // symbols from a different keypad are simply not drawn
        if let Some(key) = self.keypad.key(self.left) {
            fingers[key.pos] = Some(Agent::Left);
        }
        if let Some(key) = self.keypad.key(self.right) {
            fingers[key.pos] = Some(Agent::Right);
        }

        for r in 0..self.keypad.grid.rows() {
            for c in 0..self.keypad.grid.cols() {
                let pos = Pos::new(r, c);
                match fingers[pos] {
                    Some(agent) => write!(f, "{}", agent)?,
                    None => write!(f, "{}", self.keypad.grid[pos].unwrap_or(' '))?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for KeypadFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Fixed bijective mapping between symbols and positions
/// together with the keys both fingers start on.
#[derive(Clone)]
pub struct Keypad {
    grid: Vec2d<Option<Symbol>>,
    positions: FnvHashMap<Symbol, Pos>,
    left_start: Key,
    right_start: Key,
}

impl Keypad {
    /// The caller makes sure `grid` and `positions` describe the same keys
    /// and that both starts are distinct keys from them.
    pub(crate) fn new(
        grid: Vec2d<Option<Symbol>>,
        positions: FnvHashMap<Symbol, Pos>,
        left_start: Key,
        right_start: Key,
    ) -> Self {
        Keypad {
            grid,
            positions,
            left_start,
            right_start,
        }
    }

    pub fn standard() -> Self {
        STANDARD_LAYOUT
            .parse()
            .expect("The standard layout must always parse")
    }

    /// Parses `layout` (see `FromStr`) but starts the fingers on the given symbols.
    pub fn with_starts(layout: &str, left: Symbol, right: Symbol) -> Result<Self, ParserErr> {
        parser::parse_with_starts(layout, left, right)
    }

    pub fn key(&self, symbol: Symbol) -> Option<Key> {
        self.positions
            .get(&symbol)
            .map(|&pos| Key::new(symbol, pos))
    }

    pub fn left_start(&self) -> Key {
        self.left_start
    }

    pub fn right_start(&self) -> Key {
        self.right_start
    }

    /// All symbols in row-major order.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.grid.iter().filter_map(|(_, &cell)| cell).collect()
    }

    pub fn format_with_fingers(&self, left: Symbol, right: Symbol) -> KeypadFormatter<'_> {
        KeypadFormatter::new(self, left, right)
    }
}

impl Display for Keypad {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Keypad {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}left: {}, right: {}",
            self.grid, self.left_start, self.right_start
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_keypad() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.to_string(), "123\n456\n789\n*0#\n");
        assert_eq!(keypad.left_start(), Key::new('*', Pos::new(3, 0)));
        assert_eq!(keypad.right_start(), Key::new('#', Pos::new(3, 2)));
        assert_eq!(keypad.key('5'), Some(Key::new('5', Pos::new(1, 1))));
        assert_eq!(keypad.key('0'), Some(Key::new('0', Pos::new(3, 1))));
        assert_eq!(keypad.key('a'), None);
        assert_eq!(keypad.symbols().into_iter().collect::<String>(), "123456789*0#");
    }

    #[test]
    fn formatting_fingers() {
        let keypad = Keypad::standard();
        assert_eq!(
            keypad.format_with_fingers('*', '#').to_string(),
            "123\n456\n789\nL0R\n"
        );
        assert_eq!(
            keypad.format_with_fingers('5', '9').to_string(),
            "123\n4L6\n78R\n*0#\n"
        );
        // unknown symbols are left out
        assert_eq!(
            format!("{:?}", keypad.format_with_fingers('x', '1')),
            "R23\n456\n789\n*0#\n"
        );
    }

    #[test]
    fn formatting_holes() {
        let keypad = Keypad::with_starts("ab\n c", 'a', 'c').unwrap();
        assert_eq!(keypad.to_string(), "ab\n c\n");
        assert_eq!(keypad.format_with_fingers('a', 'c').to_string(), "Lb\n R\n");
        assert_eq!(format!("{:?}", keypad), "ab\n c\nleft: a, right: c");
    }
}
