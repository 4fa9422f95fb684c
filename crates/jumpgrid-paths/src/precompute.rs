//! Jump-table precomputation: [`JumpGrid::build`].
//!
//! Three passes over the store, in a fixed order. The primary pass marks
//! forced-neighbor jump points. The straight pass sweeps each row and
//! column, recording per cell the signed distance to the next jump point
//! (positive) or wall (zero or negative) along each cardinal. The diagonal
//! pass then derives diagonal distances from the cardinal tables, which is
//! why it must run last.

use jumpgrid_core::{Direction, Point};

use crate::grid::JumpGrid;

impl JumpGrid {
    /// Precompute the jump tables for the current obstacle layout.
    ///
    /// Clears any previous table state (obstacle flags are kept), runs the
    /// primary, straight, and diagonal passes, and marks the grid ready
    /// for searches. Call again after editing obstacles; there is no
    /// incremental update.
    pub fn build(&mut self) {
        self.reset_tables();
        self.mark_primary_jump_points();
        self.compute_straight_distances();
        self.compute_diagonal_distances();
        self.built = true;
        log::debug!(
            "built jump tables for {}x{} grid: {} jump points",
            self.width(),
            self.height(),
            self.cells.iter().filter(|c| c.is_jump_point()).count()
        );
    }

    fn reset_tables(&mut self) {
        for cell in &mut self.cells {
            cell.jump_from = [false; 8];
            cell.dist = [0; 8];
        }
    }

    /// Primary pass: each obstacle makes its open diagonal neighbors jump
    /// points when both cells orthogonally adjacent to the neighbor (on
    /// the obstacle's side) are open, the forced-neighbor rule.
    fn mark_primary_jump_points(&mut self) {
        for i in 0..self.cells.len() {
            if !self.cells[i].obstacle {
                continue;
            }
            let p = self.point(i);
            for diag in Direction::DIAGONALS {
                let n = p + diag.delta();
                if self.is_blocked(n) {
                    continue;
                }
                let (v, h) = diag.components();
                let (from_v, from_h) = (v.opposite(), h.opposite());
                if !self.is_blocked(n + from_v.delta()) && !self.is_blocked(n + from_h.delta()) {
                    let ni = self.idx(n);
                    let cell = &mut self.cells[ni];
                    cell.jump_from[from_v as usize] = true;
                    cell.jump_from[from_h as usize] = true;
                }
            }
        }
    }

    /// Straight pass: one sweep per cardinal over every row or column.
    fn compute_straight_distances(&mut self) {
        for y in 0..self.height() {
            self.sweep_line(Point::new(0, y), Direction::West);
            self.sweep_line(Point::new(self.width() - 1, y), Direction::East);
        }
        for x in 0..self.width() {
            self.sweep_line(Point::new(x, 0), Direction::North);
            self.sweep_line(Point::new(x, self.height() - 1), Direction::South);
        }
    }

    /// Walk one row or column starting at the `travel`-most cell, filling
    /// in each cell's signed distance for moving toward `travel`.
    ///
    /// The counter resets at obstacles and restarts at jump points
    /// reachable from `travel.opposite()` (the side the traveler comes
    /// from). A cell's own distance is recorded before its jump-point flag
    /// restarts the counter, so a jump point's distance refers to the
    /// previous jump point or wall.
    fn sweep_line(&mut self, start: Point, travel: Direction) {
        let origin = travel.opposite();
        let step = origin.delta();
        let mut count = -1;
        let mut jump_point_seen = false;
        let mut p = start;
        while self.contains(p) {
            let i = self.idx(p);
            let cell = &mut self.cells[i];
            if cell.obstacle {
                count = -1;
                jump_point_seen = false;
                cell.dist[travel as usize] = 0;
            } else {
                count += 1;
                cell.dist[travel as usize] = if jump_point_seen { count } else { -count };
                if cell.jump_from[origin as usize] {
                    count = 0;
                    jump_point_seen = true;
                }
            }
            p = p + step;
        }
    }

    /// Diagonal pass: rows top to bottom for the north diagonals, bottom
    /// to top for the south ones, so each cell's diagonal neighbor is
    /// already final when read.
    fn compute_diagonal_distances(&mut self) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.diagonal_distance(Point::new(x, y), Direction::NorthWest);
                self.diagonal_distance(Point::new(x, y), Direction::NorthEast);
            }
        }
        for y in (0..self.height()).rev() {
            for x in 0..self.width() {
                self.diagonal_distance(Point::new(x, y), Direction::SouthWest);
                self.diagonal_distance(Point::new(x, y), Direction::SouthEast);
            }
        }
    }

    fn diagonal_distance(&mut self, p: Point, diag: Direction) {
        let i = self.idx(p);
        if self.cells[i].obstacle {
            return;
        }
        let (v, h) = diag.components();
        let n = p + diag.delta();
        // A diagonal move is only legal when both orthogonal cells and the
        // target are open; off-grid counts as blocked, covering the edges.
        if self.is_blocked(p + v.delta()) || self.is_blocked(p + h.delta()) || self.is_blocked(n) {
            self.cells[i].dist[diag as usize] = 0;
            return;
        }
        let ni = self.idx(n);
        let neighbor = &self.cells[ni];
        if neighbor.dist[v as usize] > 0 || neighbor.dist[h as usize] > 0 {
            // A jump point is one diagonal step away, then a straight run.
            self.cells[i].dist[diag as usize] = 1;
        } else {
            let ahead = neighbor.dist[diag as usize];
            self.cells[i].dist[diag as usize] = if ahead > 0 { ahead + 1 } else { ahead - 1 };
        }
    }
}
