//! Fixed board geometry: range checks, the two territories split by the
//! river, the palaces, and each piece's forward direction.
//!
//! Everything here is keyed on a piece's *initial* rank so that a piece
//! keeps its home territory and palace after it moves.

use crate::constants::{
    LOWER_PALACE_RANKS, PALACE_FILES, RANKS, RIVER_LOW_RANK, UPPER_PALACE_RANKS,
};
use crate::types::{Coord, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Territory {
    /// Ranks 0-4.
    Lower,
    /// Ranks 5-9.
    Upper,
}

impl Territory {
    pub const fn of_rank(y: i8) -> Self {
        if y <= RIVER_LOW_RANK {
            Self::Lower
        } else {
            Self::Upper
        }
    }

    pub const fn contains(self, coord: Coord) -> bool {
        coord.is_on_board() && Self::of_rank(coord.y) as u8 == self as u8
    }
}

pub const fn check_range(coord: Coord) -> bool {
    coord.is_on_board()
}

pub const fn home_territory(piece: &Piece) -> Territory {
    Territory::of_rank(piece.initial().y)
}

/// True once the piece stands outside the half it started in.
pub fn has_crossed_river(piece: &Piece) -> bool {
    piece
        .current()
        .is_some_and(|at| !home_territory(piece).contains(at))
}

pub const fn in_palace(initial_y: i8, coord: Coord) -> bool {
    let (low, high) = match Territory::of_rank(initial_y) {
        Territory::Lower => LOWER_PALACE_RANKS,
        Territory::Upper => UPPER_PALACE_RANKS,
    };
    coord.x >= PALACE_FILES.0 && coord.x <= PALACE_FILES.1 && coord.y >= low && coord.y <= high
}

/// +1 when the piece advances towards higher ranks, -1 otherwise.
pub const fn forward_sign(initial_y: i8) -> i8 {
    if initial_y > (RANKS as i8 - 1) / 2 {
        -1
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i8, y: i8) -> Coord {
        Coord::new_unchecked(x, y)
    }

    #[test]
    fn territory_splits_at_the_river() {
        assert_eq!(Territory::of_rank(0), Territory::Lower);
        assert_eq!(Territory::of_rank(4), Territory::Lower);
        assert_eq!(Territory::of_rank(5), Territory::Upper);
        assert_eq!(Territory::of_rank(9), Territory::Upper);
        assert!(Territory::Upper.contains(c(0, 5)));
        assert!(!Territory::Upper.contains(c(0, 4)));
        assert!(!Territory::Lower.contains(c(0, -1)));
    }

    #[test]
    fn palaces_follow_the_initial_rank() {
        assert!(in_palace(9, c(4, 8)));
        assert!(in_palace(9, c(3, 7)));
        assert!(!in_palace(9, c(4, 6)));
        assert!(!in_palace(9, c(2, 9)));
        assert!(in_palace(0, c(5, 2)));
        assert!(!in_palace(0, c(4, 7)));
    }

    #[test]
    fn forward_sign_points_across_the_river() {
        assert_eq!(forward_sign(9), -1);
        assert_eq!(forward_sign(5), -1);
        assert_eq!(forward_sign(4), 1);
        assert_eq!(forward_sign(0), 1);
    }

    #[test]
    fn range_check() {
        assert!(check_range(c(8, 9)));
        assert!(!check_range(c(9, 9)));
        assert!(!check_range(c(0, 10)));
    }
}
