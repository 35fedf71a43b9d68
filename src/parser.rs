use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use fnv::FnvHashMap;

use crate::data::{Key, Pos, Symbol, MAX_SIZE};
use crate::keypad::Keypad;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Empty,
    TooLarge,
    DuplicateSymbol(Symbol, usize, usize),
    UnknownStart(Symbol),
    SameStarts(Symbol),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Empty => write!(f, "No keys"),
            ParserErr::TooLarge => write!(f, "Keypad larger than 255 rows/columns"),
            ParserErr::DuplicateSymbol(s, r, c) => {
                write!(f, "Symbol '{}' at pos [{}, {}] is already on the keypad", s, r, c)
            }
            ParserErr::UnknownStart(s) => write!(f, "Start symbol '{}' is not on the keypad", s),
            ParserErr::SameStarts(s) => write!(f, "Both fingers start on '{}'", s),
        }
    }
}

impl Error for ParserErr {}

impl FromStr for Keypad {
    type Err = ParserErr;

    /// One line per row, one character per key, spaces are holes.
    /// The fingers start on the first and last key of the bottom row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

pub(crate) fn parse(layout: &str) -> Result<Keypad, ParserErr> {
    let (grid, positions) = parse_grid(layout)?;

    // bottom row that has any keys at all
    let bottom = (0..grid.rows())
        .rev()
        .map(|r| {
            (0..grid.cols())
                .filter_map(|c| grid[Pos::new(r, c)])
                .collect::<Vec<_>>()
        })
        .find(|row| !row.is_empty())
        .ok_or(ParserErr::Empty)?;
    let left = bottom[0];
    let right = bottom[bottom.len() - 1];

    build(grid, positions, left, right)
}

pub(crate) fn parse_with_starts(
    layout: &str,
    left: Symbol,
    right: Symbol,
) -> Result<Keypad, ParserErr> {
    let (grid, positions) = parse_grid(layout)?;
    build(grid, positions, left, right)
}

fn build(
    grid: Vec2d<Option<Symbol>>,
    positions: FnvHashMap<Symbol, Pos>,
    left: Symbol,
    right: Symbol,
) -> Result<Keypad, ParserErr> {
    let left_pos = *positions.get(&left).ok_or(ParserErr::UnknownStart(left))?;
    let right_pos = *positions.get(&right).ok_or(ParserErr::UnknownStart(right))?;
    if left == right {
        return Err(ParserErr::SameStarts(left));
    }

    Ok(Keypad::new(
        grid,
        positions,
        Key::new(left, left_pos),
        Key::new(right, right_pos),
    ))
}

fn parse_grid(
    layout: &str,
) -> Result<(Vec2d<Option<Symbol>>, FnvHashMap<Symbol, Pos>), ParserErr> {
    // trim so we can specify keypads using raw strings more easily
    let layout = layout.trim_matches('\n');

    let mut grid = Vec::new();
    let mut positions = FnvHashMap::default();

    for (r, line) in layout.lines().enumerate() {
        if r >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            if c >= MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            if cur_char.is_whitespace() {
                row.push(None);
                continue;
            }

            let pos = Pos::new(r as u8, c as u8);
            if positions.insert(cur_char, pos).is_some() {
                return Err(ParserErr::DuplicateSymbol(cur_char, r, c));
            }
            row.push(Some(cur_char));
        }
        grid.push(row);
    }

    if positions.is_empty() {
        return Err(ParserErr::Empty);
    }

    Ok((Vec2d::new(&grid, None), positions))
}
