use crate::canvas::Snapshot;
use egui::Pos2;

/// Where the controller is within a stroke.
///
/// `continue` and `end` only do anything in the `Drawing` state.
#[derive(Debug, Clone, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing {
        /// Pointer position at pointer-down
        origin: Pos2,
        /// Canvas pixels at pointer-down, restored before each preview
        snapshot: Snapshot,
    },
}

impl StrokeState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn origin(&self) -> Option<Pos2> {
        match self {
            Self::Drawing { origin, .. } => Some(*origin),
            Self::Idle => None,
        }
    }

}
