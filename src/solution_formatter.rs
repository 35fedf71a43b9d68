use std::fmt::{self, Debug, Display, Formatter};

use crate::config::Format;
use crate::data::Symbol;
use crate::keypad::Keypad;

#[derive(Clone, Copy)]
pub struct SolutionFormatter<'a> {
    keypad: &'a Keypad,
    path: &'a [(Symbol, Symbol)],
    format: Format,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(keypad: &'a Keypad, path: &'a [(Symbol, Symbol)], format: Format) -> Self {
        Self {
            keypad,
            path,
            format,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &(left, right) in self.path {
            match self.format {
                Format::Pairs => writeln!(f, "({}, {})", left, right)?,
                Format::Keypad => {
                    writeln!(f, "{}", self.keypad.format_with_fingers(left, right))?
                }
            }
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
