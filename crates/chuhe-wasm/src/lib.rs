use wasm_bindgen::prelude::*;

use chuhe_core::{
    BoardConfig, ClickOutcome, Coord, MoveError, MoveOutcome, Piece, PieceId, PieceKind, Side,
    Xiangqi,
};
use serde::Serialize;

/// Install the panic hook and route `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Serializable piece representation for JS consumers.
#[derive(Serialize)]
struct JsPiece {
    id: u16,
    kind: PieceKind,
    side: Side,
    glyph: String,
    x: i8,
    y: i8,
}

impl JsPiece {
    /// Captured pieces report the cell they were taken on.
    fn from_piece(piece: &Piece) -> Option<Self> {
        let at = piece.current().or(piece.previous())?;
        Some(Self {
            id: piece.id().0,
            kind: piece.kind(),
            side: piece.side(),
            glyph: piece.glyph().to_string(),
            x: at.x,
            y: at.y,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStagedPlacement {
    kind: PieceKind,
    side: Side,
    glyph: String,
    x: i8,
    y: i8,
    delay_ms: u32,
}

#[derive(Serialize)]
struct JsMoveSet {
    moveable: Vec<(i8, i8)>,
    capturable: Vec<(i8, i8)>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsMoveResult {
    success: bool,
    captured: Option<JsPiece>,
    from: Option<(i8, i8)>,
    to: Option<(i8, i8)>,
    error: Option<String>,
}

impl JsMoveResult {
    fn from_outcome(outcome: &MoveOutcome) -> Self {
        Self {
            success: true,
            captured: outcome.captured.as_ref().and_then(JsPiece::from_piece),
            from: Some((outcome.from.x, outcome.from.y)),
            to: Some((outcome.to.x, outcome.to.y)),
            error: None,
        }
    }

    fn from_error(err: &MoveError) -> Self {
        Self {
            success: false,
            captured: None,
            from: None,
            to: None,
            error: Some(err.to_string()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsClickResult {
    outcome: &'static str,
    #[serde(flatten)]
    result: Option<JsMoveResult>,
}

/// Plain objects and `null` for `None`, so results read like JSON.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Main WASM-exported Xiangqi board.
#[wasm_bindgen]
pub struct ChuheBoard {
    game: Xiangqi,
}

#[wasm_bindgen]
impl ChuheBoard {
    /// Create a board. `options` is an optional object
    /// `{ populate, animateSetup, setupIntervalSecs }`; missing fields keep
    /// their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<ChuheBoard, JsError> {
        let config = if options.is_undefined() || options.is_null() {
            BoardConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsError::new(&format!("invalid options: {}", e)))?
        };
        Ok(Self {
            game: Xiangqi::new(config),
        })
    }

    /// Create a board with no pieces on it.
    pub fn empty() -> ChuheBoard {
        Self {
            game: Xiangqi::new(BoardConfig {
                populate: false,
                ..BoardConfig::default()
            }),
        }
    }

    /// Every piece on the board as `{ id, kind, side, glyph, x, y }`.
    pub fn pieces(&self) -> Result<JsValue, JsError> {
        let pieces: Vec<JsPiece> = self
            .game
            .board()
            .pieces()
            .filter_map(JsPiece::from_piece)
            .collect();
        to_js(&pieces)
    }

    /// Opening placements in entrance order with their delays.
    #[wasm_bindgen(js_name = "setupPlan")]
    pub fn setup_plan(&self) -> Result<JsValue, JsError> {
        let plan: Vec<JsStagedPlacement> = self
            .game
            .setup_plan()
            .into_iter()
            .map(|step| JsStagedPlacement {
                kind: step.placement.kind,
                side: step.placement.side,
                glyph: step.placement.kind.glyph(step.placement.side).to_string(),
                x: step.placement.coord.x,
                y: step.placement.coord.y,
                delay_ms: step.delay_ms,
            })
            .collect();
        to_js(&plan)
    }

    /// Place a piece by kind name (`"rook"`, `"cannon"`, ...) or glyph.
    /// Returns the new piece id.
    #[wasm_bindgen(js_name = "addPiece")]
    pub fn add_piece(&mut self, kind: &str, second: bool, x: i32, y: i32) -> Result<u16, JsError> {
        let kind = parse_kind(kind).ok_or_else(|| JsError::new("unknown piece kind"))?;
        let side = if second { Side::Second } else { Side::First };
        self.game
            .add_piece(kind, side, Coord::saturating(x, y))
            .map(|id| id.0)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// `{ moveable: [[x, y], ...], capturable: [[x, y], ...] }` for a piece.
    #[wasm_bindgen(js_name = "moveSet")]
    pub fn move_set(&self, id: u16) -> Result<JsValue, JsError> {
        let set = self.game.move_set(PieceId(id));
        to_js(&JsMoveSet {
            moveable: set.moveable.iter().map(|sq| (sq.x, sq.y)).collect(),
            capturable: set.capturable.iter().map(|sq| (sq.x, sq.y)).collect(),
        })
    }

    /// Structural move. Failures come back as `success: false` with an
    /// `error` message instead of throwing.
    #[wasm_bindgen(js_name = "attemptMove")]
    pub fn attempt_move(&mut self, id: u16, x: i32, y: i32) -> Result<JsValue, JsError> {
        let result = match self
            .game
            .attempt_move(PieceId(id), Coord::saturating(x, y))
        {
            Ok(outcome) => JsMoveResult::from_outcome(&outcome),
            Err(err) => JsMoveResult::from_error(&err),
        };
        to_js(&result)
    }

    /// Remove whatever stands on `(x, y)`. Returns true if a piece was removed.
    pub fn remove(&mut self, x: i32, y: i32) -> bool {
        self.game.remove(Coord::saturating(x, y))
    }

    /// Toggle the selection of a piece. Returns the selected id, if any.
    #[wasm_bindgen(js_name = "clickPiece")]
    pub fn click_piece(&mut self, id: u16) -> Option<u16> {
        self.game.click_piece(PieceId(id)).selected().map(|id| id.0)
    }

    /// Move the selected piece to `(x, y)` if it can reach it. Returns
    /// `{ outcome: "ignored" | "moved" | "rejected", ... }`.
    #[wasm_bindgen(js_name = "clickCell")]
    pub fn click_cell(&mut self, x: i32, y: i32) -> Result<JsValue, JsError> {
        let result = match self.game.click_cell(Coord::saturating(x, y)) {
            ClickOutcome::Ignored => JsClickResult {
                outcome: "ignored",
                result: None,
            },
            ClickOutcome::Moved(outcome) => JsClickResult {
                outcome: "moved",
                result: Some(JsMoveResult::from_outcome(&outcome)),
            },
            ClickOutcome::Rejected(err) => JsClickResult {
                outcome: "rejected",
                result: Some(JsMoveResult::from_error(&err)),
            },
        };
        to_js(&result)
    }

    pub fn selected(&self) -> Option<u16> {
        self.game.selection().selected().map(|id| id.0)
    }
}

fn parse_kind(name: &str) -> Option<PieceKind> {
    let mut chars = name.chars();
    if let (Some(glyph), None) = (chars.next(), chars.next()) {
        if let Some(kind) = PieceKind::from_glyph(glyph) {
            return Some(kind);
        }
    }
    PieceKind::ALL
        .into_iter()
        .find(|kind| format!("{:?}", kind).eq_ignore_ascii_case(name))
}
