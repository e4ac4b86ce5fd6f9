use super::geometry::{OverlayGeometry, Position, Viewport};

/// Fixed button placement used when dragging is off or unsupported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticPlacement {
    position: Position,
    close_position: Position,
}

impl StaticPlacement {
    pub fn new(viewport: Viewport, geometry: &OverlayGeometry) -> Self {
        let position = geometry.initial_position(viewport);
        Self {
            position,
            close_position: geometry.close_button_position(position),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn close_button_position(&self) -> Position {
        self.close_position
    }

    pub fn opacity(&self) -> f32 {
        1.0
    }
}
