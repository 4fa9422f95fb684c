//! The 8-way compass: [`Direction`].
//!
//! Directions are ordinal-indexable (`North = 0` through `NorthWest = 7`,
//! clockwise) so per-cell tables can be stored as plain 8-slot arrays.

use crate::geom::Point;

use Direction::*;

/// A compass direction on an 8-connected grid.
///
/// Screen coordinates: north is `y - 1`, east is `x + 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All eight directions, in ordinal order.
    pub const ALL: [Direction; 8] = [
        North, NorthEast, East, SouthEast, South, SouthWest, West, NorthWest,
    ];

    /// The four cardinal directions.
    pub const CARDINALS: [Direction; 4] = [North, East, South, West];

    /// The four diagonal directions.
    pub const DIAGONALS: [Direction; 4] = [NorthEast, SouthEast, SouthWest, NorthWest];

    /// Unit step for this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            North => Point::new(0, -1),
            NorthEast => Point::new(1, -1),
            East => Point::new(1, 0),
            SouthEast => Point::new(1, 1),
            South => Point::new(0, 1),
            SouthWest => Point::new(-1, 1),
            West => Point::new(-1, 0),
            NorthWest => Point::new(-1, -1),
        }
    }

    /// Whether this is one of the four cardinal directions.
    #[inline]
    pub const fn is_cardinal(self) -> bool {
        matches!(self, North | East | South | West)
    }

    /// Whether this is one of the four diagonal directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// The direction pointing the opposite way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            North => South,
            NorthEast => SouthWest,
            East => West,
            SouthEast => NorthWest,
            South => North,
            SouthWest => NorthEast,
            West => East,
            NorthWest => SouthEast,
        }
    }

    /// The two cardinal components of a diagonal, as (vertical, horizontal).
    ///
    /// # Panics
    ///
    /// Panics if called on a cardinal direction.
    #[inline]
    pub const fn components(self) -> (Direction, Direction) {
        match self {
            NorthEast => (North, East),
            SouthEast => (South, East),
            SouthWest => (South, West),
            NorthWest => (North, West),
            _ => panic!("components() is only defined for diagonal directions"),
        }
    }

    /// Directions worth exploring after arriving via `self`.
    ///
    /// This is the neighbor-pruning rule of jump point search: a cardinal
    /// arrival keeps five directions (the forward fan), a diagonal arrival
    /// keeps three. A node with no arrival direction explores [`Self::ALL`].
    #[inline]
    pub const fn canonical(self) -> &'static [Direction] {
        match self {
            South => &[West, SouthWest, South, SouthEast, East],
            SouthEast => &[South, SouthEast, East],
            East => &[South, SouthEast, East, NorthEast, North],
            NorthEast => &[East, NorthEast, North],
            North => &[East, NorthEast, North, NorthWest, West],
            NorthWest => &[North, NorthWest, West],
            West => &[North, NorthWest, West, SouthWest, South],
            SouthWest => &[West, SouthWest, South],
        }
    }

    /// Whether `to` lies exactly along this ray from `from`.
    ///
    /// Cardinals require the orthogonal delta to be zero; diagonals require
    /// equal absolute deltas. A zero displacement matches no direction.
    pub fn exact_toward(self, from: Point, to: Point) -> bool {
        let d = to - from;
        let v = self.delta();
        let signs_match = d.x.signum() == v.x && d.y.signum() == v.y;
        if self.is_diagonal() {
            signs_match && d.x.abs() == d.y.abs()
        } else {
            signs_match
        }
    }

    /// Whether `to` lies in this direction's general quadrant from `from`.
    ///
    /// Like [`Self::exact_toward`] but without the diagonal alignment
    /// requirement: any displacement whose component signs match counts.
    pub fn general_toward(self, from: Point, to: Point) -> bool {
        let d = to - from;
        let v = self.delta();
        d.x.signum() == v.x && d.y.signum() == v.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_are_stable() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(*dir as usize, i);
        }
    }

    #[test]
    fn deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let d = dir.delta();
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1);
            assert_ne!(d, Point::ZERO);
            if dir.is_cardinal() {
                assert_eq!(d.x.abs() + d.y.abs(), 1);
            } else {
                assert_eq!(d.x.abs() + d.y.abs(), 2);
            }
        }
    }

    #[test]
    fn opposite_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.delta() + dir.opposite().delta(), Point::ZERO);
        }
    }

    #[test]
    fn components_recompose_diagonals() {
        for dir in Direction::DIAGONALS {
            let (v, h) = dir.components();
            assert!(v.is_cardinal() && h.is_cardinal());
            assert_eq!(v.delta() + h.delta(), dir.delta());
        }
    }

    #[test]
    fn canonical_fan_sizes() {
        for dir in Direction::ALL {
            let fan = dir.canonical();
            if dir.is_cardinal() {
                assert_eq!(fan.len(), 5);
            } else {
                assert_eq!(fan.len(), 3);
            }
            // The arrival direction itself is always kept.
            assert!(fan.contains(&dir));
            // Backtracking is always pruned.
            assert!(!fan.contains(&dir.opposite()));
        }
    }

    #[test]
    fn canonical_contents() {
        assert_eq!(
            South.canonical(),
            &[West, SouthWest, South, SouthEast, East]
        );
        assert_eq!(NorthWest.canonical(), &[North, NorthWest, West]);
    }

    #[test]
    fn exact_toward_cardinal() {
        let from = Point::new(3, 3);
        assert!(North.exact_toward(from, Point::new(3, 0)));
        assert!(!North.exact_toward(from, Point::new(4, 0)));
        assert!(East.exact_toward(from, Point::new(9, 3)));
        assert!(!East.exact_toward(from, Point::new(2, 3)));
    }

    #[test]
    fn exact_toward_diagonal_requires_alignment() {
        let from = Point::new(2, 2);
        assert!(SouthEast.exact_toward(from, Point::new(5, 5)));
        // Right quadrant, but off the diagonal.
        assert!(!SouthEast.exact_toward(from, Point::new(5, 4)));
        assert!(NorthWest.exact_toward(from, Point::new(0, 0)));
    }

    #[test]
    fn general_toward_quadrants() {
        let from = Point::new(2, 2);
        assert!(SouthEast.general_toward(from, Point::new(5, 4)));
        assert!(SouthEast.general_toward(from, Point::new(3, 9)));
        assert!(!SouthEast.general_toward(from, Point::new(5, 2)));
        assert!(!SouthEast.general_toward(from, Point::new(1, 4)));
    }

    #[test]
    fn zero_displacement_matches_nothing() {
        let p = Point::new(4, 4);
        for dir in Direction::ALL {
            assert!(!dir.exact_toward(p, p));
            assert!(!dir.general_toward(p, p));
        }
    }
}
