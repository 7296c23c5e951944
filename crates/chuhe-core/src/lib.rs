pub mod board;
pub mod config;
pub mod constants;
pub mod executor;
pub mod game;
pub mod movegen;
pub mod selection;
pub mod setup;
pub mod types;
pub mod zone;

pub use board::{Board, BoardError};
pub use config::BoardConfig;
pub use executor::{attempt_move, MoveError, MoveOutcome};
pub use game::{ClickOutcome, StagedPlacement, Xiangqi};
pub use movegen::{generate_move_set, MoveSet};
pub use selection::SelectionState;
pub use setup::{populate, staged_order, standard_placements, Placement, SetupReport};
pub use types::{Coord, CoordList, Piece, PieceId, PieceKind, Side};
