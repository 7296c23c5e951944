//! Standard opening layout as plain data, and the feed that puts it on a
//! board.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::board::{Board, BoardError};
use crate::constants::{CENTER_FILE_TEMPLATE, PIECES_PER_SIDE, TOTAL_PIECES, WING_TEMPLATE};
use crate::types::{Coord, PieceId, PieceKind, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub kind: PieceKind,
    pub side: Side,
    pub coord: Coord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub placement: Placement,
    pub result: Result<PieceId, BoardError>,
}

pub type Placements = ArrayVec<Placement, TOTAL_PIECES>;

/// The 32 opening placements: the `First` half built from the templates
/// (wing pieces paired with their mirror across the centre file), followed
/// by the same 16 reflected across the river for `Second`.
pub fn standard_placements() -> Placements {
    let mut first = ArrayVec::<Placement, PIECES_PER_SIDE>::new();
    for (kind, coord) in CENTER_FILE_TEMPLATE {
        first.push(Placement {
            kind,
            side: Side::First,
            coord,
        });
    }
    for (kind, coord) in WING_TEMPLATE {
        for coord in [coord, coord.mirror_file()] {
            first.push(Placement {
                kind,
                side: Side::First,
                coord,
            });
        }
    }

    let mut all = Placements::new();
    all.extend(first.iter().copied());
    all.extend(first.iter().map(|p| Placement {
        kind: p.kind,
        side: Side::Second,
        coord: p.coord.mirror_rank(),
    }));
    all
}

/// Top-to-bottom, then left-to-right: the order pieces enter the board
/// when the setup is animated.
pub fn staged_order(placements: &mut [Placement]) {
    placements.sort_by_key(|p| (p.coord.y, p.coord.x));
}

/// Places each entry in the given order and reports every outcome. A
/// failure only skips that entry.
pub fn populate(board: &mut Board, placements: &[Placement]) -> Vec<SetupReport> {
    placements
        .iter()
        .map(|&placement| SetupReport {
            placement,
            result: board.add_piece(placement.kind, placement.side, placement.coord),
        })
        .collect()
}
