use chuhe_core::game::{ClickOutcome, Xiangqi};
use chuhe_core::selection::SelectionState;
use chuhe_core::types::{Coord, PieceId, PieceKind, Side};
use chuhe_core::{Board, BoardConfig, MoveError};

fn c(x: i8, y: i8) -> Coord {
    Coord::new(x, y).expect("valid coord")
}

fn id_at(game: &Xiangqi, x: i8, y: i8) -> PieceId {
    game.board().piece_id_at(c(x, y)).expect("piece")
}

#[test]
fn config_controls_the_initial_board() {
    let populated = Xiangqi::default();
    assert_eq!(populated.board().piece_count(), 32);

    let config: BoardConfig = serde_json::from_str(r#"{ "populate": false }"#).unwrap();
    assert!(config.animate_setup);
    let empty = Xiangqi::new(config);
    assert_eq!(empty.board().piece_count(), 0);
}

#[test]
fn config_deserializes_camel_case_fields() {
    let config: BoardConfig = serde_json::from_str(
        r#"{ "populate": true, "animateSetup": false, "setupIntervalSecs": 0.25 }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        BoardConfig {
            populate: true,
            animate_setup: false,
            setup_interval_secs: 0.25,
        }
    );
}

#[test]
fn setup_plan_staggers_the_entrance() {
    let game = Xiangqi::default();
    let plan = game.setup_plan();

    assert_eq!(plan.len(), 32);
    assert_eq!(plan[0].delay_ms, 0);
    assert_eq!(plan[1].delay_ms, 100);
    assert_eq!(plan[31].delay_ms, 3100);
    assert_eq!(plan[0].placement.coord, c(0, 0));

    let still = Xiangqi::new(BoardConfig {
        animate_setup: false,
        ..BoardConfig::default()
    });
    assert!(still.setup_plan().iter().all(|step| step.delay_ms == 0));
}

#[test]
fn clicking_the_selected_piece_again_deselects_it() {
    let mut game = Xiangqi::default();
    let rook = id_at(&game, 0, 9);
    let knight = id_at(&game, 1, 9);

    assert_eq!(game.click_piece(rook), SelectionState::Selected(rook));
    assert_eq!(game.click_piece(knight), SelectionState::Selected(knight));
    assert_eq!(game.click_piece(knight), SelectionState::Idle);
    assert_eq!(game.click_piece(PieceId(777)), SelectionState::Idle);
}

#[test]
fn cell_click_without_selection_is_ignored() {
    let mut game = Xiangqi::default();
    let before = game.board().clone();

    assert_eq!(game.click_cell(c(4, 4)), ClickOutcome::Ignored);
    assert_eq!(game.board(), &before);
}

#[test]
fn cell_click_moves_the_selected_piece() {
    let mut game = Xiangqi::default();
    let soldier = id_at(&game, 4, 6);

    game.click_piece(soldier);
    let ClickOutcome::Moved(outcome) = game.click_cell(c(4, 5)) else {
        panic!("soldier should advance");
    };
    assert_eq!(outcome.from, c(4, 6));
    assert_eq!(outcome.to, c(4, 5));
    assert!(outcome.captured.is_none());
    assert!(game.selection().is_idle());
    assert_eq!(game.board().piece_id_at(c(4, 5)), Some(soldier));
}

#[test]
fn rejected_cell_click_keeps_the_selection() {
    let mut game = Xiangqi::default();
    let soldier = id_at(&game, 4, 6);

    game.click_piece(soldier);
    assert_eq!(
        game.click_cell(c(3, 6)),
        ClickOutcome::Rejected(MoveError::Unreachable { x: 3, y: 6 })
    );
    assert_eq!(
        game.click_cell(c(4, 6)),
        ClickOutcome::Rejected(MoveError::NullMove)
    );
    assert_eq!(
        game.click_cell(c(4, 9)),
        ClickOutcome::Rejected(MoveError::OccupiedByOwn { x: 4, y: 9 })
    );
    assert_eq!(game.selection(), SelectionState::Selected(soldier));

    assert!(matches!(game.click_cell(c(4, 5)), ClickOutcome::Moved(_)));
}

#[test]
fn play_refuses_unreachable_targets_but_attempt_move_does_not() {
    let mut game = Xiangqi::default();
    let rook = id_at(&game, 0, 9);

    assert_eq!(
        game.play(rook, c(0, 5)),
        Err(MoveError::Unreachable { x: 0, y: 5 })
    );
    assert_eq!(game.board().piece_id_at(c(0, 9)), Some(rook));

    game.attempt_move(rook, c(0, 5)).unwrap();
    assert_eq!(game.board().piece_id_at(c(0, 5)), Some(rook));
}

#[test]
fn capturing_the_selected_piece_clears_the_selection() {
    let mut board = Board::empty();
    let rook = board
        .add_piece(PieceKind::Rook, Side::First, c(0, 9))
        .unwrap();
    let target = board
        .add_piece(PieceKind::Knight, Side::Second, c(0, 2))
        .unwrap();
    let mut game = Xiangqi::from_board(board);
    assert!(!game.config().populate);

    game.click_piece(target);
    let outcome = game.play(rook, c(0, 2)).unwrap();
    assert_eq!(outcome.captured.map(|p| p.id()), Some(target));
    assert!(game.selection().is_idle());
    assert!(game.piece(target).is_none());
}

#[test]
fn removing_the_selected_piece_clears_the_selection() {
    let mut game = Xiangqi::default();
    let cannon = id_at(&game, 1, 7);

    game.click_piece(cannon);
    assert!(game.remove(c(1, 7)));
    assert!(game.selection().is_idle());
    assert!(!game.remove(c(1, 7)));
    assert_eq!(game.click_cell(c(1, 5)), ClickOutcome::Ignored);
}

#[test]
fn pieces_can_be_added_to_an_empty_game() {
    let mut game = Xiangqi::new(BoardConfig {
        populate: false,
        ..BoardConfig::default()
    });
    let king = game.add_piece(PieceKind::King, Side::First, c(4, 9)).unwrap();
    let set = game.move_set(king);

    let mut moveable = set.moveable.to_vec();
    moveable.sort();
    assert_eq!(moveable, vec![c(3, 9), c(4, 8), c(5, 9)]);
}
