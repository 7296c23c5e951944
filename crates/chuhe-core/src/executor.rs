use log::info;
use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::types::{Coord, Piece, PieceId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("({x}, {y}) is outside the board")]
    OutOfRange { x: i8, y: i8 },
    #[error("piece {0} is not on the board")]
    NotOnBoard(PieceId),
    #[error("a move must change the piece's position")]
    NullMove,
    #[error("({x}, {y}) is blocked by own piece")]
    OccupiedByOwn { x: i8, y: i8 },
    #[error("({x}, {y}) is not reachable by this piece")]
    Unreachable { x: i8, y: i8 },
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: PieceId,
    pub from: Coord,
    pub to: Coord,
    /// The opponent piece taken off `to`, already detached from the board.
    pub captured: Option<Piece>,
}

/// Relocates `id` to `target`, capturing an opponent standing there.
///
/// Only the structural rules are enforced here (on-board target, no null
/// move, no self-capture). Whether the piece can actually reach `target` is
/// decided by the caller from [`crate::movegen::generate_move_set`]; the
/// checked path is [`crate::game::Xiangqi::play`]. A rejected call leaves
/// the board untouched.
pub fn attempt_move(
    board: &mut Board,
    id: PieceId,
    target: Coord,
) -> Result<MoveOutcome, MoveError> {
    let from = check_move(board, id, target)?;
    let tag = match board.piece(id) {
        Some(mover) => mover.tag(),
        None => return Err(MoveError::NotOnBoard(id)),
    };

    board.set_target(id, target);
    let captured = board.take(target);
    board.place(id, target)?;

    match &captured {
        Some(taken) => info!("{} {} -> {} takes {}", tag, from, target, taken.tag()),
        None => info!("{} {} -> {}", tag, from, target),
    }

    Ok(MoveOutcome {
        piece: id,
        from,
        to: target,
        captured,
    })
}

/// Structural validation shared by every move path. Returns the mover's
/// current coordinate.
pub fn check_move(board: &Board, id: PieceId, target: Coord) -> Result<Coord, MoveError> {
    if !Board::check_range(target) {
        return Err(MoveError::OutOfRange {
            x: target.x,
            y: target.y,
        });
    }

    let mover = board.piece(id).ok_or(MoveError::NotOnBoard(id))?;
    let from = mover.current().ok_or(MoveError::NotOnBoard(id))?;
    if from == target {
        return Err(MoveError::NullMove);
    }
    if board
        .piece_at(target)
        .is_some_and(|occupant| occupant.side() == mover.side())
    {
        return Err(MoveError::OccupiedByOwn {
            x: target.x,
            y: target.y,
        });
    }
    Ok(from)
}
