use arrayvec::ArrayVec;
use log::debug;

use crate::board::Board;
use crate::constants::{DIAGONAL_DIRS, ELEPHANT_LEAPS, KNIGHT_LEAPS, MAX_REACH, ORTHOGONAL_DIRS};
use crate::types::{Coord, CoordList, Piece, PieceId, PieceKind, Side};
use crate::zone::{forward_sign, has_crossed_river, home_territory, in_palace};

/// Squares a piece may finish on, and the subset of those holding an
/// opponent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    pub moveable: CoordList,
    pub capturable: CoordList,
}

impl MoveSet {
    pub fn can_reach(&self, coord: Coord) -> bool {
        self.moveable.contains(&coord)
    }

    pub fn can_capture(&self, coord: Coord) -> bool {
        self.capturable.contains(&coord)
    }

    pub fn is_empty(&self) -> bool {
        self.moveable.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// One application of the direction vector.
    Step,
    /// Repeat until blocked or off the board.
    Slide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Ray {
        dirs: &'static [(i8, i8)],
        reach: Reach,
    },
    /// Orthogonal slide that captures only over exactly one screen.
    Screened,
}

/// Raw movement shape per kind, indexed by `PieceKind as usize`. Palace,
/// river, eye, leg and soldier-direction rules are applied afterwards by
/// [`is_permitted`].
pub const PIECE_GEOMETRY: [Geometry; 7] = [
    Geometry::Ray {
        dirs: &ORTHOGONAL_DIRS,
        reach: Reach::Slide,
    },
    Geometry::Ray {
        dirs: &KNIGHT_LEAPS,
        reach: Reach::Step,
    },
    Geometry::Ray {
        dirs: &ELEPHANT_LEAPS,
        reach: Reach::Step,
    },
    Geometry::Ray {
        dirs: &DIAGONAL_DIRS,
        reach: Reach::Step,
    },
    Geometry::Ray {
        dirs: &ORTHOGONAL_DIRS,
        reach: Reach::Step,
    },
    Geometry::Screened,
    Geometry::Ray {
        dirs: &ORTHOGONAL_DIRS,
        reach: Reach::Step,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub to: Coord,
    pub capture: bool,
}

pub type Candidates = ArrayVec<Candidate, MAX_REACH>;

/// Move set of the piece `id`. Empty when the handle is unknown or the
/// piece is not on the board.
pub fn generate_move_set(board: &Board, id: PieceId) -> MoveSet {
    let Some(piece) = board.piece(id) else {
        return MoveSet::default();
    };
    let Some(origin) = piece.current() else {
        return MoveSet::default();
    };

    let mut candidates = raw_candidates(board, piece, origin);
    candidates.retain(|c| is_permitted(board, piece, origin, c.to));

    let mut set = MoveSet::default();
    for candidate in candidates {
        let _ = set.moveable.try_push(candidate.to);
        if candidate.capture {
            let _ = set.capturable.try_push(candidate.to);
        }
    }
    debug!(
        "{}: {} moveable, {} capturable",
        piece,
        set.moveable.len(),
        set.capturable.len()
    );
    set
}

/// Geometry-only targets for `piece` standing on `origin`.
pub fn raw_candidates(board: &Board, piece: &Piece, origin: Coord) -> Candidates {
    let mut out = Candidates::new();
    match PIECE_GEOMETRY[piece.kind() as usize] {
        Geometry::Ray { dirs, reach } => {
            for &dir in dirs {
                ray_cast(board, origin, piece.side(), dir, reach, &mut out);
            }
        }
        Geometry::Screened => {
            for &dir in &ORTHOGONAL_DIRS {
                screened_ray(board, origin, piece.side(), dir, &mut out);
            }
        }
    }
    out
}

/// Walks from `origin` along `dir`. Empty cells are collected; the first
/// occupied cell ends the walk and is collected as a capture when it holds
/// an opponent.
pub fn ray_cast(
    board: &Board,
    origin: Coord,
    side: Side,
    dir: (i8, i8),
    reach: Reach,
    out: &mut Candidates,
) {
    let (dx, dy) = dir;
    let mut at = origin;
    loop {
        at = at.offset(dx, dy);
        if !Board::check_range(at) {
            break;
        }

        match board.piece_at(at) {
            None => {
                let _ = out.try_push(Candidate {
                    to: at,
                    capture: false,
                });
                if reach == Reach::Step {
                    break;
                }
            }
            Some(occupant) => {
                if occupant.side() != side {
                    let _ = out.try_push(Candidate {
                        to: at,
                        capture: true,
                    });
                }
                break;
            }
        }
    }
}

fn screened_ray(board: &Board, origin: Coord, side: Side, dir: (i8, i8), out: &mut Candidates) {
    let (dx, dy) = dir;
    let mut at = origin;
    let mut screened = false;
    loop {
        at = at.offset(dx, dy);
        if !Board::check_range(at) {
            break;
        }

        match (board.piece_at(at), screened) {
            (None, false) => {
                let _ = out.try_push(Candidate {
                    to: at,
                    capture: false,
                });
            }
            (None, true) => {}
            (Some(_), false) => screened = true,
            (Some(occupant), true) => {
                if occupant.side() != side {
                    let _ = out.try_push(Candidate {
                        to: at,
                        capture: true,
                    });
                }
                break;
            }
        }
    }
}

/// Per-kind restrictions on a geometric candidate.
pub fn is_permitted(board: &Board, piece: &Piece, origin: Coord, to: Coord) -> bool {
    match piece.kind() {
        PieceKind::Rook | PieceKind::Cannon => true,
        PieceKind::Knight => !board.is_occupied(knight_leg(origin, to)),
        PieceKind::Elephant => {
            !board.is_occupied(elephant_eye(origin, to)) && home_territory(piece).contains(to)
        }
        PieceKind::Guard | PieceKind::King => in_palace(piece.initial().y, to),
        PieceKind::Soldier => soldier_step_allowed(piece, origin, to),
    }
}

/// Orthogonal neighbour of `origin` on the axis of the two-cell offset.
pub const fn knight_leg(origin: Coord, to: Coord) -> Coord {
    let dx = to.x.wrapping_sub(origin.x);
    let dy = to.y.wrapping_sub(origin.y);
    if matches!(dx, 2 | -2) {
        origin.offset(dx / 2, 0)
    } else {
        origin.offset(0, dy / 2)
    }
}

pub const fn elephant_eye(origin: Coord, to: Coord) -> Coord {
    origin.offset(
        to.x.wrapping_sub(origin.x) / 2,
        to.y.wrapping_sub(origin.y) / 2,
    )
}

/// Never backwards; sideways only once the soldier is across the river.
pub fn soldier_step_allowed(piece: &Piece, origin: Coord, to: Coord) -> bool {
    let dy = to.y - origin.y;
    if dy * forward_sign(piece.initial().y) < 0 {
        return false;
    }
    if dy == 0 {
        return has_crossed_river(piece);
    }
    true
}
