use crate::types::PieceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected(PieceId),
}

impl SelectionState {
    /// Clicking the selected piece again cancels; any other piece replaces
    /// the selection.
    pub const fn toggle(self, id: PieceId) -> Self {
        match self {
            Self::Selected(current) if current.0 == id.0 => Self::Idle,
            _ => Self::Selected(id),
        }
    }

    pub const fn selected(self) -> Option<PieceId> {
        match self {
            Self::Idle => None,
            Self::Selected(id) => Some(id),
        }
    }

    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}
