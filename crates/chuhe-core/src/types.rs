use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::constants::{FILES, MAX_REACH, RANKS};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First = 0,
    Second = 1,
}

impl Side {
    pub const BOTH: [Self; 2] = [Self::First, Self::Second];

    /// Flag shown in move descriptions: 红 for the side that starts on
    /// ranks 5-9, 黑 for the other.
    pub const fn label(self) -> char {
        match self {
            Self::First => '红',
            Self::Second => '黑',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Rook = 0,
    Knight = 1,
    Elephant = 2,
    Guard = 3,
    King = 4,
    Cannon = 5,
    Soldier = 6,
}

impl PieceKind {
    pub const ALL: [Self; 7] = [
        Self::Rook,
        Self::Knight,
        Self::Elephant,
        Self::Guard,
        Self::King,
        Self::Cannon,
        Self::Soldier,
    ];

    /// Display character for this kind on the given side. The two sides
    /// draw five of the seven kinds with different characters.
    pub const fn glyph(self, side: Side) -> char {
        match (self, side) {
            (Self::Rook, _) => '车',
            (Self::Knight, _) => '马',
            (Self::Elephant, Side::First) => '相',
            (Self::Elephant, Side::Second) => '象',
            (Self::Guard, Side::First) => '仕',
            (Self::Guard, Side::Second) => '士',
            (Self::King, Side::First) => '帅',
            (Self::King, Side::Second) => '将',
            (Self::Cannon, Side::First) => '炮',
            (Self::Cannon, Side::Second) => '砲',
            (Self::Soldier, Side::First) => '兵',
            (Self::Soldier, Side::Second) => '卒',
        }
    }

    /// Accepts either side's character.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '车' => Some(Self::Rook),
            '马' => Some(Self::Knight),
            '相' | '象' => Some(Self::Elephant),
            '仕' | '士' => Some(Self::Guard),
            '帅' | '将' => Some(Self::King),
            '炮' | '砲' => Some(Self::Cannon),
            '兵' | '卒' => Some(Self::Soldier),
            _ => None,
        }
    }
}

/// A board intersection. Values outside the 9x10 grid are representable so
/// that ray walks and caller input can step off the board; use
/// [`Coord::is_on_board`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Option<Self> {
        let coord = Self { x, y };
        if coord.is_on_board() {
            Some(coord)
        } else {
            None
        }
    }

    pub const fn new_unchecked(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Narrows wide caller input without wrapping: anything outside the
    /// `i8` range saturates, so it stays off the board instead of aliasing
    /// onto a real cell.
    pub const fn saturating(x: i32, y: i32) -> Self {
        Self {
            x: saturate_i8(x),
            y: saturate_i8(y),
        }
    }

    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < FILES as i8 && self.y >= 0 && self.y < RANKS as i8
    }

    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Reflection across the centre file (x = 4).
    pub const fn mirror_file(self) -> Self {
        Self {
            x: FILES as i8 - 1 - self.x,
            y: self.y,
        }
    }

    /// Reflection across the river (y = 4.5).
    pub const fn mirror_rank(self) -> Self {
        Self {
            x: self.x,
            y: RANKS as i8 - 1 - self.y,
        }
    }

    pub(crate) const fn grid_index(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.y as usize, self.x as usize))
        } else {
            None
        }
    }
}

const fn saturate_i8(v: i32) -> i8 {
    if v < i8::MIN as i32 {
        i8::MIN
    } else if v > i8::MAX as i32 {
        i8::MAX
    } else {
        v as i8
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Arena handle of a piece inside one [`crate::board::Board`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub u16);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    side: Side,
    initial: Coord,
    current: Option<Coord>,
    previous: Option<Coord>,
    target: Option<Coord>,
}

impl Piece {
    pub(crate) const fn new(id: PieceId, kind: PieceKind, side: Side, initial: Coord) -> Self {
        Self {
            id,
            kind,
            side,
            initial,
            current: None,
            previous: None,
            target: None,
        }
    }

    pub const fn id(&self) -> PieceId {
        self.id
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    pub const fn side(&self) -> Side {
        self.side
    }

    pub const fn glyph(&self) -> char {
        self.kind.glyph(self.side)
    }

    /// Coordinate the piece was created for. Territory, palace and forward
    /// direction are all derived from this, never from `current`.
    pub const fn initial(&self) -> Coord {
        self.initial
    }

    /// `None` until the piece is placed, and again once it is captured.
    pub const fn current(&self) -> Option<Coord> {
        self.current
    }

    pub const fn previous(&self) -> Option<Coord> {
        self.previous
    }

    pub const fn target(&self) -> Option<Coord> {
        self.target
    }

    pub const fn is_placed(&self) -> bool {
        self.current.is_some()
    }

    /// `[side] glyph`, the prefix every log record uses for a piece.
    pub fn tag(&self) -> String {
        format!("[{}] {}", self.side, self.glyph())
    }

    pub(crate) fn relocate(&mut self, to: Coord) {
        self.previous = self.current;
        self.current = Some(to);
    }

    pub(crate) fn detach(&mut self) {
        self.previous = self.current;
        self.current = None;
    }

    pub(crate) fn set_target(&mut self, target: Coord) {
        self.target = Some(target);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.current {
            Some(at) => write!(f, "{} {}", self.tag(), at),
            None => write!(f, "{} (off board)", self.tag()),
        }
    }
}

pub type CoordList = ArrayVec<Coord, MAX_REACH>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_normalize_to_the_same_kind_for_both_sides() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_glyph(kind.glyph(Side::First)), Some(kind));
            assert_eq!(PieceKind::from_glyph(kind.glyph(Side::Second)), Some(kind));
        }
        assert_ne!(
            PieceKind::Elephant.glyph(Side::First),
            PieceKind::Elephant.glyph(Side::Second)
        );
        assert_eq!(PieceKind::from_glyph('王'), None);
    }

    #[test]
    fn coord_bounds() {
        assert_eq!(Coord::new(0, 0), Some(Coord::new_unchecked(0, 0)));
        assert_eq!(Coord::new(8, 9), Some(Coord::new_unchecked(8, 9)));
        assert_eq!(Coord::new(9, 0), None);
        assert_eq!(Coord::new(0, 10), None);
        assert_eq!(Coord::new(-1, 4), None);
        assert!(!Coord::new_unchecked(i8::MAX, 0).offset(1, 0).is_on_board());
    }

    #[test]
    fn saturating_never_wraps_onto_the_board() {
        assert_eq!(Coord::saturating(4, 9), Coord::new_unchecked(4, 9));
        assert_eq!(Coord::saturating(256, 0), Coord::new_unchecked(i8::MAX, 0));
        assert_eq!(Coord::saturating(0, -300), Coord::new_unchecked(0, i8::MIN));
        assert!(!Coord::saturating(256, 0).is_on_board());
        assert!(!Coord::saturating(9, 0).is_on_board());
        assert!(!Coord::saturating(i32::MIN, i32::MAX).is_on_board());
    }

    #[test]
    fn mirrors_are_involutions() {
        let c = Coord::new_unchecked(1, 7);
        assert_eq!(c.mirror_file(), Coord::new_unchecked(7, 7));
        assert_eq!(c.mirror_rank(), Coord::new_unchecked(1, 2));
        assert_eq!(c.mirror_file().mirror_file(), c);
        assert_eq!(c.mirror_rank().mirror_rank(), c);
    }

    #[test]
    fn relocate_tracks_previous_position() {
        let mut piece = Piece::new(
            PieceId(0),
            PieceKind::Rook,
            Side::First,
            Coord::new_unchecked(0, 9),
        );
        assert!(!piece.is_placed());

        piece.relocate(Coord::new_unchecked(0, 9));
        assert_eq!(piece.previous(), None);

        piece.relocate(Coord::new_unchecked(0, 7));
        assert_eq!(piece.previous(), Some(Coord::new_unchecked(0, 9)));
        assert_eq!(piece.current(), Some(Coord::new_unchecked(0, 7)));

        piece.detach();
        assert_eq!(piece.current(), None);
        assert_eq!(piece.previous(), Some(Coord::new_unchecked(0, 7)));
    }

    #[test]
    fn tag_and_display_bracket_the_side() {
        let mut piece = Piece::new(
            PieceId(3),
            PieceKind::Cannon,
            Side::Second,
            Coord::new_unchecked(1, 2),
        );
        assert_eq!(piece.tag(), "[黑] 砲");
        assert_eq!(piece.to_string(), "[黑] 砲 (off board)");

        piece.relocate(Coord::new_unchecked(1, 2));
        assert_eq!(piece.to_string(), "[黑] 砲 (1, 2)");
    }
}
