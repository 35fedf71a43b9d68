use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::{Pos, Symbol};

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: u8,
    cols: u8,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> u8 {
        self.rows
    }

    pub(crate) fn cols(&self) -> u8 {
        self.cols
    }

    /// All cells in row-major order together with their positions.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        let cols = usize::from(self.cols);
        self.data.iter().enumerate().map(move |(i, cell)| {
            // fits because rows and cols are u8
            (Pos::new((i / cols) as u8, (i % cols) as u8), cell)
        })
    }
}

impl<T: Copy> Vec2d<T> {
    /// Shorter rows are padded with `fill`.
    ///
    /// The caller makes sure there's at least one row and column and at most 255 of each.
    pub(crate) fn new(grid: &[Vec<T>], fill: T) -> Self {
        let max_cols = grid.iter().map(Vec::len).max().unwrap_or(0);
        assert!(!grid.is_empty() && max_cols > 0);

        let mut data = Vec::with_capacity(grid.len() * max_cols);
        for row in grid {
            data.extend_from_slice(row);
            for _ in row.len()..max_cols {
                data.push(fill);
            }
        }
        Vec2d {
            data,
            rows: grid.len() as u8,
            cols: max_cols as u8,
        }
    }

    pub(crate) fn scratchpad<U: Copy>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl Display for Vec2d<Option<Symbol>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.cols.into()) {
            for cell in row {
                write!(f, "{}", cell.unwrap_or(' '))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for Vec2d<Option<Symbol>> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        let index = usize::from(index.r) * usize::from(self.cols) + usize::from(index.c);
        &self.data[index]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let index = usize::from(index.r) * usize::from(self.cols) + usize::from(index.c);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_and_indexing() {
        let grid = vec![vec![Some('1'), Some('2')], vec![Some('3')]];
        let mut grid = Vec2d::new(&grid, None);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid[Pos::new(0, 1)], Some('2'));
        assert_eq!(grid[Pos::new(1, 1)], None);

        grid[Pos::new(1, 1)] = Some('4');
        assert_eq!(grid.to_string(), "12\n34\n");
    }

    #[test]
    fn iterating() {
        let grid = Vec2d::new(&[vec![1, 2, 3], vec![4, 5, 6]], 0);
        let cells: Vec<_> = grid.iter().map(|(pos, &cell)| (pos.r, pos.c, cell)).collect();
        assert_eq!(
            cells,
            vec![(0, 0, 1), (0, 1, 2), (0, 2, 3), (1, 0, 4), (1, 1, 5), (1, 2, 6)]
        );

        let scratch = grid.scratchpad(false);
        assert_eq!(scratch.rows(), 2);
        assert_eq!(scratch.cols(), 3);
        assert!(scratch.iter().all(|(_, &cell)| !cell));
    }
}
