mod backtracking;
mod best;
mod distances;
mod stats;

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

use log::{debug, trace};

use crate::config::Format;
use crate::data::{Agent, Key, Symbol};
use crate::keypad::Keypad;
use crate::solution_formatter::SolutionFormatter;
use crate::Dial;

pub use self::backtracking::reconstruct_path;
pub use self::best::{BestSolution, BestSolutionTracker};
pub use self::distances::DistanceCache;
pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    InvalidSymbol(Symbol, usize),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::InvalidSymbol(s, i) => {
                write!(f, "Symbol '{}' at index {} is not on the keypad", s, i)
            }
        }
    }
}

impl Error for SolverErr {}

pub struct SolverOk {
    /// Sum of the distances traveled by both fingers.
    pub distance: f64,
    /// Finger positions before the first digit and after each one.
    pub path: Vec<(Symbol, Symbol)>,
    pub choices: Vec<Agent>,
    pub stats: Stats,
}

impl SolverOk {
    fn new(distance: f64, path: Vec<(Symbol, Symbol)>, choices: Vec<Agent>, stats: Stats) -> Self {
        Self {
            distance,
            path,
            choices,
            stats,
        }
    }

    pub fn format<'a>(&'a self, keypad: &'a Keypad, format: Format) -> SolutionFormatter<'a> {
        SolutionFormatter::new(keypad, &self.path, format)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distance: {}", self.distance)?;
        writeln!(f, "Path: {:?}", self.path)?;
        write!(f, "{:?}", self.stats)
    }
}

impl Dial for Keypad {
    fn dial(&self, number: &str, print_status: bool) -> Result<SolverOk, SolverErr> {
        solve(self, number, print_status)
    }
}

pub fn solve(keypad: &Keypad, number: &str, print_status: bool) -> Result<SolverOk, SolverErr> {
    solve_with_cache(keypad, number, &mut DistanceCache::new(), print_status)
}

/// Like `solve` but reuses `distances` which must only ever be used with `keypad`.
pub fn solve_with_cache(
    keypad: &Keypad,
    number: &str,
    distances: &mut DistanceCache,
    print_status: bool,
) -> Result<SolverOk, SolverErr> {
    debug!("Resolving keys...");
    let keys = resolve_keys(keypad, number)?;
    debug!("Resolved {} keys", keys.len());

    let left = keypad.left_start();
    let right = keypad.right_start();

    let mut ctx = SearchContext::new(&keys, distances, print_status);
    ctx.search(left, right, 0.0, 0);
    let SearchContext { best, stats, .. } = ctx;
    let best = best.into_best();
    debug!("Search finished, best distance: {}", best.score);
    trace!(
        "Distance cache: {} entries, {} hits, {} misses",
        distances.len(),
        distances.hits(),
        distances.misses()
    );

    let symbols: Vec<_> = keys.iter().map(|key| key.symbol).collect();
    let path = reconstruct_path(left.symbol, right.symbol, &symbols, &best.choices);
    Ok(SolverOk::new(best.score, path, best.choices, stats))
}

fn resolve_keys(keypad: &Keypad, number: &str) -> Result<Vec<Key>, SolverErr> {
    number
        .chars()
        .enumerate()
        .map(|(i, symbol)| keypad.key(symbol).ok_or(SolverErr::InvalidSymbol(symbol, i)))
        .collect()
}

/// Everything the recursion needs besides the current node.
struct SearchContext<'a> {
    keys: &'a [Key],
    distances: &'a mut DistanceCache,
    choices: Vec<Agent>,
    best: BestSolutionTracker,
    stats: Stats,
    print_status: bool,
}

impl<'a> SearchContext<'a> {
    fn new(keys: &'a [Key], distances: &'a mut DistanceCache, print_status: bool) -> Self {
        Self {
            keys,
            distances,
            choices: Vec::with_capacity(keys.len()),
            best: BestSolutionTracker::new(),
            stats: Stats::new(),
            print_status,
        }
    }

    fn search(&mut self, left: Key, right: Key, score: f64, depth: usize) {
        self.stats.add_expanded(depth);

        let target = match self.keys.get(depth) {
            Some(&target) => target,
            None => {
                if self.best.consider(score, &self.choices) {
                    self.stats.add_improvement();
                    if self.print_status {
                        println!("Found better solution: {}", score);
                    }
                }
                return;
            }
        };

        // left always goes first - the order decides which of equally good solutions is returned
        self.try_move(Agent::Left, left, right, target, score, depth);
        self.try_move(Agent::Right, left, right, target, score, depth);
    }

    fn try_move(
        &mut self,
        agent: Agent,
        left: Key,
        right: Key,
        target: Key,
        score: f64,
        depth: usize,
    ) {
        let (moving, other) = match agent {
            Agent::Left => (left, right),
            Agent::Right => (right, left),
        };

        // compared against where the other finger is now, not where it might go later
        if target.pos == other.pos {
            self.stats.add_collision(depth);
            return;
        }

        // distances are never negative so nothing below can get back under the best
        let new_score = score + self.distances.distance(moving, target);
        if !self.best.improves(new_score) {
            self.stats.add_pruned(depth);
            return;
        }

        self.choices.push(agent);
        match agent {
            Agent::Left => self.search(target, right, new_score, depth + 1),
            Agent::Right => self.search(left, target, new_score, depth + 1),
        }
        self.choices.pop();
    }
}
