//! The static obstacle store and its precomputed jump tables: [`JumpGrid`].

use std::fmt;

use jumpgrid_core::{Direction, Point};

/// Per-cell static data: the obstacle flag plus the jump tables filled in
/// by [`JumpGrid::build`].
#[derive(Clone, Default)]
pub(crate) struct JumpCell {
    pub(crate) obstacle: bool,
    /// Whether this cell is a jump point when arrived at from that
    /// direction (indexed by direction ordinal).
    pub(crate) jump_from: [bool; 8],
    /// Signed jump distance per direction. Positive: steps to a reachable
    /// jump point. Zero or negative: magnitude is the number of steps
    /// until a wall, obstacle, or the grid edge blocks travel.
    pub(crate) dist: [i32; 8],
}

impl JumpCell {
    #[inline]
    pub(crate) fn is_jump_point(&self) -> bool {
        self.jump_from.iter().any(|&from| from)
    }
}

/// A uniform-cost grid with blocked cells and per-cell jump tables.
///
/// Obstacles are set first, then [`build`](Self::build) runs the table
/// precomputation. After that the grid is a read-only oracle for any
/// number of concurrent searches (each with its own
/// [`PathBuffer`](crate::PathBuffer)). Editing an obstacle marks the
/// tables stale; searching again requires another `build`.
pub struct JumpGrid {
    width: i32,
    height: i32,
    pub(crate) cells: Vec<JumpCell>,
    pub(crate) built: bool,
}

impl JumpGrid {
    /// Create a grid with every cell open.
    ///
    /// # Panics
    ///
    /// Panics unless both dimensions are at least 1.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![JumpCell::default(); (width as usize) * (height as usize)],
            built: false,
        }
    }

    /// Build a grid from a predicate returning `true` for blocked cells,
    /// and precompute its jump tables.
    pub fn from_fn(width: i32, height: i32, blocked: impl Fn(Point) -> bool) -> Self {
        let mut grid = Self::new(width, height);
        for i in 0..grid.cells.len() {
            let p = grid.point(i);
            grid.cells[i].obstacle = blocked(p);
        }
        grid.build();
        grid
    }

    /// Parse a grid from ASCII art and precompute its jump tables.
    ///
    /// `.` is open and `#` is blocked. Lines are trimmed of surrounding
    /// whitespace and blank lines are ignored, so maps can be indented
    /// inside raw strings. All rows must have the same width.
    pub fn from_ascii(map: &str) -> Result<Self, GridParseError> {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        let mut width = 0usize;
        for (lineno, raw) in map.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for glyph in line.chars() {
                match glyph {
                    '.' => row.push(false),
                    '#' => row.push(true),
                    _ => {
                        return Err(GridParseError::UnknownGlyph {
                            glyph,
                            line: lineno + 1,
                        });
                    }
                }
            }
            if rows.is_empty() {
                width = row.len();
            } else if row.len() != width {
                return Err(GridParseError::RaggedRow { line: lineno + 1 });
            }
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(GridParseError::Empty);
        }

        let mut grid = Self::new(width as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, &obstacle) in row.iter().enumerate() {
                grid.cells[y * width + x].obstacle = obstacle;
            }
        }
        grid.build();
        Ok(grid)
    }

    /// Grid width (column count).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height (row count).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is on the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` cannot be stood on: an obstacle cell, or off the grid.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        !self.contains(p) || self.cells[self.idx(p)].obstacle
    }

    /// Set or clear the obstacle flag at `p`, marking the jump tables
    /// stale until the next [`build`](Self::build).
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of bounds.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) {
        assert!(self.contains(p), "cell {p} out of bounds");
        let i = self.idx(p);
        self.cells[i].obstacle = obstacle;
        self.built = false;
    }

    /// Whether the jump tables match the current obstacle layout.
    #[inline]
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// Whether `p` carries any jump-point marker. Blocked and off-grid
    /// positions are never jump points.
    pub fn is_jump_point(&self, p: Point) -> bool {
        self.contains(p) && self.cells[self.idx(p)].is_jump_point()
    }

    /// The signed jump distance at `p` toward `dir`.
    ///
    /// Positive values count steps to a reachable jump point; zero or
    /// negative values count steps until travel is blocked. Blocked and
    /// off-grid positions report 0 in every direction.
    pub fn jump_distance(&self, p: Point, dir: Direction) -> i32 {
        if !self.contains(p) {
            return 0;
        }
        self.cells[self.idx(p)].dist[dir as usize]
    }

    /// One step from `p` toward `dir`, if it stays on the grid.
    #[inline]
    pub fn step(&self, p: Point, dir: Direction) -> Option<Point> {
        let n = p + dir.delta();
        if self.contains(n) { Some(n) } else { None }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat row-major index of an in-bounds point.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}

/// Errors from [`JumpGrid::from_ascii`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// The map contained no rows.
    Empty,
    /// A row's width differs from the first row's. Lines are 1-based.
    RaggedRow { line: usize },
    /// A character other than `.` or `#`. Lines are 1-based.
    UnknownGlyph { glyph: char, line: usize },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map has no rows"),
            Self::RaggedRow { line } => write!(f, "map row at line {line} has inconsistent width"),
            Self::UnknownGlyph { glyph, line } => {
                write!(f, "map contains unknown glyph {glyph:?} at line {line}")
            }
        }
    }
}

impl std::error::Error for GridParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_open_and_unbuilt() {
        let grid = JumpGrid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
        assert!(!grid.is_empty());
        assert!(!grid.is_built());
        assert!(!grid.is_blocked(Point::new(3, 2)));
    }

    #[test]
    #[should_panic(expected = "dimensions must be positive")]
    fn zero_width_panics() {
        JumpGrid::new(0, 5);
    }

    #[test]
    fn out_of_bounds_counts_as_blocked() {
        let grid = JumpGrid::new(3, 3);
        assert!(grid.is_blocked(Point::new(-1, 0)));
        assert!(grid.is_blocked(Point::new(0, -1)));
        assert!(grid.is_blocked(Point::new(3, 0)));
        assert!(grid.is_blocked(Point::new(0, 3)));
        assert!(!grid.is_blocked(Point::new(2, 2)));
    }

    #[test]
    fn set_obstacle_marks_tables_stale() {
        let mut grid = JumpGrid::new(3, 3);
        grid.build();
        assert!(grid.is_built());
        grid.set_obstacle(Point::new(1, 1), true);
        assert!(!grid.is_built());
        assert!(grid.is_blocked(Point::new(1, 1)));
        grid.build();
        assert!(grid.is_built());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_obstacle_out_of_bounds_panics() {
        let mut grid = JumpGrid::new(3, 3);
        grid.set_obstacle(Point::new(3, 0), true);
    }

    #[test]
    fn from_fn_builds() {
        let grid = JumpGrid::from_fn(5, 4, |p| p.x == 2);
        assert!(grid.is_built());
        assert!(grid.is_blocked(Point::new(2, 3)));
        assert!(!grid.is_blocked(Point::new(1, 3)));
    }

    #[test]
    fn from_ascii_parses_and_builds() {
        let grid = JumpGrid::from_ascii(
            "
            ....
            .#..
            ....
            ",
        )
        .unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert!(grid.is_built());
        assert!(grid.is_blocked(Point::new(1, 1)));
        assert!(!grid.is_blocked(Point::new(0, 0)));
    }

    #[test]
    fn from_ascii_rejects_bad_maps() {
        assert!(matches!(
            JumpGrid::from_ascii("  \n\n"),
            Err(GridParseError::Empty)
        ));
        assert!(matches!(
            JumpGrid::from_ascii("...\n.."),
            Err(GridParseError::RaggedRow { line: 2 })
        ));
        assert!(matches!(
            JumpGrid::from_ascii("..\n.x"),
            Err(GridParseError::UnknownGlyph { glyph: 'x', line: 2 })
        ));
    }

    #[test]
    fn parse_errors_display() {
        let err = GridParseError::UnknownGlyph {
            glyph: '?',
            line: 3,
        };
        assert!(err.to_string().contains("line 3"));
        assert!(GridParseError::Empty.to_string().contains("no rows"));
    }

    #[test]
    fn step_respects_edges() {
        let grid = JumpGrid::new(3, 3);
        assert_eq!(
            grid.step(Point::new(1, 1), Direction::NorthEast),
            Some(Point::new(2, 0))
        );
        assert_eq!(grid.step(Point::new(0, 0), Direction::North), None);
        assert_eq!(grid.step(Point::new(2, 2), Direction::SouthEast), None);
    }

    #[test]
    fn index_roundtrip() {
        let grid = JumpGrid::new(7, 5);
        for i in 0..grid.len() {
            let p = grid.point(i);
            assert!(grid.contains(p));
            assert_eq!(grid.idx(p), i);
        }
    }
}
