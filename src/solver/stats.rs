use std::fmt::{Debug, Display, Formatter, Result};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    expanded: Vec<usize>,
    collisions: Vec<usize>,
    pruned: Vec<usize>,
    improvements: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_expanded(&self) -> usize {
        self.expanded.iter().sum()
    }

    pub fn total_collisions(&self) -> usize {
        self.collisions.iter().sum()
    }

    pub fn total_pruned(&self) -> usize {
        self.pruned.iter().sum()
    }

    pub fn improvements(&self) -> usize {
        self.improvements
    }

    pub fn expanded_at(&self, depth: usize) -> usize {
        self.expanded.get(depth).cloned().unwrap_or(0)
    }

    pub fn collisions_at(&self, depth: usize) -> usize {
        self.collisions.get(depth).cloned().unwrap_or(0)
    }

    pub fn pruned_at(&self, depth: usize) -> usize {
        self.pruned.get(depth).cloned().unwrap_or(0)
    }

    pub(crate) fn add_expanded(&mut self, depth: usize) {
        Self::add(&mut self.expanded, depth);
    }

    pub(crate) fn add_collision(&mut self, depth: usize) {
        Self::add(&mut self.collisions, depth);
    }

    pub(crate) fn add_pruned(&mut self, depth: usize) {
        Self::add(&mut self.pruned, depth);
    }

    pub(crate) fn add_improvement(&mut self) {
        self.improvements += 1;
    }

    fn add(counts: &mut Vec<usize>, depth: usize) {
        // while because moves at some depths might never be rejected
        while depth >= counts.len() {
            counts.push(0);
        }
        counts[depth] += 1;
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Expanded"),
            Cell::new("Collisions"),
            Cell::new("Pruned"),
        ]));
        // expanded is the longest, the last depth is always reached
        for depth in 0..self.expanded.len() {
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&self.expanded_at(depth).separated_string()),
                Cell::new(&self.collisions_at(depth).separated_string()),
                Cell::new(&self.pruned_at(depth).separated_string()),
            ]));
        }
        table
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "expanded by depth: {:?}", self.expanded)?;
        writeln!(f, "collisions by depth: {:?}", self.collisions)?;
        writeln!(f, "pruned by depth: {:?}", self.pruned)?;
        writeln!(f, "total expanded: {}", self.total_expanded().separated_string())?;
        writeln!(f, "total collisions: {}", self.total_collisions().separated_string())?;
        writeln!(f, "total pruned: {}", self.total_pruned().separated_string())?;
        writeln!(f, "improvements: {}", self.improvements.separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Nodes expanded total: {}", self.total_expanded().separated_string())?;
        writeln!(
            f,
            "Moves rejected by collision total: {}",
            self.total_collisions().separated_string()
        )?;
        writeln!(f, "Moves pruned by bound total: {}", self.total_pruned().separated_string())?;
        writeln!(f, "Best solution improved: {}", self.improvements.separated_string())?;
        writeln!(f)?;
        write!(f, "{}", self.table())
    }
}
