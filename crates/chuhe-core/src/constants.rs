use crate::types::{Coord, PieceKind};

pub const FILES: usize = 9;
pub const RANKS: usize = 10;

/// Last rank of the lower half; the river runs between this rank and the next.
pub const RIVER_LOW_RANK: i8 = 4;

pub const PALACE_FILES: (i8, i8) = (3, 5);
pub const LOWER_PALACE_RANKS: (i8, i8) = (0, 2);
pub const UPPER_PALACE_RANKS: (i8, i8) = (7, 9);

/// Longest possible move set: a rook or cannon in a corner of an empty board
/// reaches 8 files plus 9 ranks.
pub const MAX_REACH: usize = 17;

pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const ELEPHANT_LEAPS: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

pub const KNIGHT_LEAPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Placements on the centre file for the side starting on ranks 5-9.
pub const CENTER_FILE_TEMPLATE: [(PieceKind, Coord); 2] = [
    (PieceKind::King, Coord::new_unchecked(4, 9)),
    (PieceKind::Soldier, Coord::new_unchecked(4, 6)),
];

/// Left-wing placements for the same side; each one is paired with its
/// reflection across the centre file.
pub const WING_TEMPLATE: [(PieceKind, Coord); 7] = [
    (PieceKind::Rook, Coord::new_unchecked(0, 9)),
    (PieceKind::Knight, Coord::new_unchecked(1, 9)),
    (PieceKind::Elephant, Coord::new_unchecked(2, 9)),
    (PieceKind::Guard, Coord::new_unchecked(3, 9)),
    (PieceKind::Cannon, Coord::new_unchecked(1, 7)),
    (PieceKind::Soldier, Coord::new_unchecked(0, 6)),
    (PieceKind::Soldier, Coord::new_unchecked(2, 6)),
];

pub const PIECES_PER_SIDE: usize = CENTER_FILE_TEMPLATE.len() + WING_TEMPLATE.len() * 2;
pub const TOTAL_PIECES: usize = PIECES_PER_SIDE * 2;

pub const COORDS: [Coord; FILES * RANKS] = all_coords();

const fn all_coords() -> [Coord; FILES * RANKS] {
    let mut out = [Coord::new_unchecked(0, 0); FILES * RANKS];
    let mut i = 0;
    while i < FILES * RANKS {
        out[i] = Coord::new_unchecked((i % FILES) as i8, (i / FILES) as i8);
        i += 1;
    }
    out
}
