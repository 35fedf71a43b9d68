// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod keypad;
pub mod parser;
pub mod solution_formatter;
pub mod solver;

mod vec2d;

use crate::data::Symbol;
use crate::keypad::Keypad;
use crate::solver::{SolverErr, SolverOk};

pub trait Dial {
    fn dial(&self, number: &str, print_status: bool) -> Result<SolverOk, SolverErr>;
}

/// Laziest way to dial `number` on a push button telephone with two fingers
/// starting on `*` (left) and `#` (right).
///
/// Returns the total distance traveled by both fingers and their positions
/// before the first digit and after each one.
pub fn compute_laziest_path(number: &str) -> Result<(f64, Vec<(Symbol, Symbol)>), SolverErr> {
    let solution = Keypad::standard().dial(number, false)?;
    Ok((solution.distance, solution.path))
}
