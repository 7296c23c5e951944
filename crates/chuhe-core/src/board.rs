use log::{debug, info, warn};
use thiserror::Error;

use crate::constants::{COORDS, FILES, RANKS};
use crate::setup::{populate, standard_placements};
use crate::types::{Coord, Piece, PieceId, PieceKind, Side};
use crate::zone;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("({x}, {y}) is outside the board")]
    OutOfRange { x: i8, y: i8 },
    #[error("({x}, {y}) is already occupied")]
    Occupied { x: i8, y: i8 },
    #[error("piece {0} is not on this board")]
    UnknownPiece(PieceId),
    #[error("no piece handles left on this board")]
    ArenaFull,
}

impl BoardError {
    pub(crate) const fn out_of_range(coord: Coord) -> Self {
        Self::OutOfRange {
            x: coord.x,
            y: coord.y,
        }
    }

    pub(crate) const fn occupied(coord: Coord) -> Self {
        Self::Occupied {
            x: coord.x,
            y: coord.y,
        }
    }
}

/// Grid of piece handles plus the arena that owns the pieces.
///
/// A handle resolves through [`Board::piece`] only while the piece is on the
/// board; captured and removed pieces leave the arena and their slot is
/// never handed out again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PieceId>; FILES]; RANKS],
    pieces: Vec<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; FILES]; RANKS],
            pieces: Vec::new(),
        }
    }

    /// Board holding the 32 pieces of the standard opening layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        populate(&mut board, &standard_placements());
        board
    }

    pub const fn check_range(coord: Coord) -> bool {
        zone::check_range(coord)
    }

    pub fn piece_id_at(&self, coord: Coord) -> Option<PieceId> {
        let (r, f) = coord.grid_index()?;
        self.cells[r][f]
    }

    /// `None` for empty cells and for coordinates off the board.
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.piece_id_at(coord).and_then(|id| self.piece(id))
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_some()
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(usize::from(id.0)).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: PieceId) -> bool {
        self.piece(id).is_some()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().flatten()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Creates a piece for `initial` and places it there. Nothing is stored
    /// when the coordinate is off the board or already taken.
    pub fn add_piece(
        &mut self,
        kind: PieceKind,
        side: Side,
        initial: Coord,
    ) -> Result<PieceId, BoardError> {
        let Some((r, f)) = initial.grid_index() else {
            warn!(
                "[{}] {} cannot be placed at {}: outside the board",
                side,
                kind.glyph(side),
                initial
            );
            return Err(BoardError::out_of_range(initial));
        };
        if self.cells[r][f].is_some() {
            warn!(
                "[{}] {} cannot be placed at {}: cell already occupied",
                side,
                kind.glyph(side),
                initial
            );
            return Err(BoardError::occupied(initial));
        }

        let Ok(slot) = u16::try_from(self.pieces.len()) else {
            warn!(
                "[{}] {} cannot be placed at {}: piece handles exhausted",
                side,
                kind.glyph(side),
                initial
            );
            return Err(BoardError::ArenaFull);
        };
        let id = PieceId(slot);
        let mut piece = Piece::new(id, kind, side, initial);
        piece.relocate(initial);
        info!("{} placed", piece);

        self.cells[r][f] = Some(id);
        self.pieces.push(Some(piece));
        Ok(id)
    }

    /// Puts a piece already in the arena on `coord` and clears the cell it
    /// stood on before. The destination must be empty; capturing is the
    /// executor's job.
    pub fn place(&mut self, id: PieceId, coord: Coord) -> Result<(), BoardError> {
        let (r, f) = coord
            .grid_index()
            .ok_or(BoardError::out_of_range(coord))?;
        let slot = usize::from(id.0);
        let prior = self
            .piece(id)
            .ok_or(BoardError::UnknownPiece(id))?
            .current();

        if prior == Some(coord) {
            return Ok(());
        }
        if self.cells[r][f].is_some() {
            return Err(BoardError::occupied(coord));
        }

        if let Some((pr, pf)) = prior.and_then(Coord::grid_index) {
            self.cells[pr][pf] = None;
        }
        self.cells[r][f] = Some(id);
        if let Some(piece) = self.pieces[slot].as_mut() {
            piece.relocate(coord);
        }
        Ok(())
    }

    /// Clears `coord` and detaches whatever stood there. Returns false for
    /// empty or off-board cells.
    pub fn remove(&mut self, coord: Coord) -> bool {
        self.take(coord).is_some()
    }

    /// Like [`Board::remove`] but hands the detached piece back.
    pub fn take(&mut self, coord: Coord) -> Option<Piece> {
        let (r, f) = coord.grid_index()?;
        let id = self.cells[r][f].take()?;
        let mut piece = self.pieces.get_mut(usize::from(id.0))?.take()?;
        piece.detach();
        debug!("{} removed from {}", piece.tag(), coord);
        Some(piece)
    }

    pub(crate) fn set_target(&mut self, id: PieceId, target: Coord) {
        if let Some(piece) = self.pieces.get_mut(usize::from(id.0)).and_then(Option::as_mut) {
            piece.set_target(target);
        }
    }

    /// Cell contents and piece coordinates agree in both directions.
    pub fn is_consistent(&self) -> bool {
        let cells_agree = COORDS.iter().all(|&coord| match self.piece_at(coord) {
            Some(piece) => piece.current() == Some(coord),
            None => self.piece_id_at(coord).is_none(),
        });
        let pieces_agree = self.pieces().all(|piece| {
            piece
                .current()
                .is_some_and(|at| self.piece_id_at(at) == Some(piece.id()))
        });
        cells_agree && pieces_agree
    }
}
