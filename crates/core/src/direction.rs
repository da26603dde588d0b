//! Direction table - per-direction step, traversal order and bound check
//!
//! Shift, collapse and the game-over check all read from this table; nothing
//! else in the crate matches on a [`Direction`].
//!
//! For a grid of side n stored row-major:
//!
//! | Direction | step | traversal | destination in bounds |
//! |-----------|------|-----------|-----------------------|
//! | Up        | -n   | ascending | `t >= 0` |
//! | Left      | -1   | ascending | `(t + 1) % n != 0` |
//! | Down      | +n   | descending| `t < n²` |
//! | Right     | +1   | descending| `t % n != 0` |
//!
//! Traversal starts at the destination edge so tiles nearest to it settle
//! first and the ones behind them can slide into the freed space.

use crate::types::Direction;

/// Motion rules for one direction on a grid of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    direction: Direction,
    step: isize,
    ascending: bool,
    n: isize,
    len: usize,
}

impl Motion {
    pub fn new(direction: Direction, size: usize) -> Self {
        let n = size as isize;
        let (step, ascending) = match direction {
            Direction::Up => (-n, true),
            Direction::Left => (-1, true),
            Direction::Down => (n, false),
            Direction::Right => (1, false),
        };
        Self {
            direction,
            step,
            ascending,
            n,
            len: size * size,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Flat-index delta for one cell of movement
    pub fn step(&self) -> isize {
        self.step
    }

    /// Index one step from `from`, if it is still on the grid.
    ///
    /// The bound predicate is evaluated on the destination index.
    #[inline(always)]
    pub fn neighbor(&self, from: usize) -> Option<usize> {
        let target = from as isize + self.step;
        if self.in_bounds(target) {
            Some(target as usize)
        } else {
            None
        }
    }

    /// Whether a destination index reached by one step stays on the grid
    #[inline(always)]
    pub fn in_bounds(&self, target: isize) -> bool {
        match self.direction {
            Direction::Up => target >= 0,
            Direction::Left => (target + 1).rem_euclid(self.n) != 0,
            Direction::Down => target < self.len as isize,
            Direction::Right => target.rem_euclid(self.n) != 0,
        }
    }

    /// Cell indices in processing order
    pub fn traversal(&self) -> Traversal {
        Traversal {
            front: 0,
            back: self.len,
            ascending: self.ascending,
        }
    }
}

/// Iterator over flat indices in a direction's processing order.
#[derive(Debug, Clone)]
pub struct Traversal {
    front: usize,
    back: usize,
    ascending: bool,
}

impl Iterator for Traversal {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.front >= self.back {
            return None;
        }
        if self.ascending {
            let i = self.front;
            self.front += 1;
            Some(i)
        } else {
            self.back -= 1;
            Some(self.back)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Traversal {}

/// The four motions for a grid, built once per grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionTable {
    motions: [Motion; 4],
}

impl MotionTable {
    pub fn new(size: usize) -> Self {
        Self {
            motions: Direction::ALL.map(|dir| Motion::new(dir, size)),
        }
    }

    pub fn get(&self, direction: Direction) -> &Motion {
        &self.motions[direction.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_match_row_major_layout() {
        let table = MotionTable::new(4);
        assert_eq!(table.get(Direction::Up).step(), -4);
        assert_eq!(table.get(Direction::Down).step(), 4);
        assert_eq!(table.get(Direction::Left).step(), -1);
        assert_eq!(table.get(Direction::Right).step(), 1);
    }

    #[test]
    fn test_traversal_orders() {
        let table = MotionTable::new(2);
        let up: Vec<usize> = table.get(Direction::Up).traversal().collect();
        let left: Vec<usize> = table.get(Direction::Left).traversal().collect();
        let down: Vec<usize> = table.get(Direction::Down).traversal().collect();
        let right: Vec<usize> = table.get(Direction::Right).traversal().collect();
        assert_eq!(up, vec![0, 1, 2, 3]);
        assert_eq!(left, vec![0, 1, 2, 3]);
        assert_eq!(down, vec![3, 2, 1, 0]);
        assert_eq!(right, vec![3, 2, 1, 0]);
        assert_eq!(table.get(Direction::Down).traversal().len(), 4);
    }

    #[test]
    fn test_neighbors_stop_at_edges() {
        let table = MotionTable::new(3);
        let up = table.get(Direction::Up);
        let left = table.get(Direction::Left);
        let down = table.get(Direction::Down);
        let right = table.get(Direction::Right);

        // Top row cannot go up, others can.
        assert_eq!(up.neighbor(1), None);
        assert_eq!(up.neighbor(4), Some(1));

        // Column 0 cannot go left; no wrap onto the previous row.
        assert_eq!(left.neighbor(0), None);
        assert_eq!(left.neighbor(3), None);
        assert_eq!(left.neighbor(5), Some(4));

        // Bottom row cannot go down.
        assert_eq!(down.neighbor(7), None);
        assert_eq!(down.neighbor(4), Some(7));

        // Last column cannot go right; no wrap onto the next row.
        assert_eq!(right.neighbor(2), None);
        assert_eq!(right.neighbor(8), None);
        assert_eq!(right.neighbor(3), Some(4));
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let table = MotionTable::new(1);
        for dir in Direction::ALL {
            assert_eq!(table.get(dir).neighbor(0), None, "{:?}", dir);
        }
    }
}
