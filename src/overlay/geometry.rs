use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Size and spacing of the floating button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayGeometry {
    pub control_size: f32,
    /// Horizontal gap kept between the button and the screen edges.
    pub padding: f32,
    /// Smallest allowed top coordinate. Kept separate from `padding`.
    pub top_inset: f32,
    /// Distance from the bottom edge to the lowest allowed top coordinate.
    pub bottom_offset: f32,
    pub close_offset_x: f32,
    pub close_offset_y: f32,
}

impl Default for OverlayGeometry {
    fn default() -> Self {
        Self {
            control_size: 58.0,
            padding: 20.0,
            top_inset: 50.0,
            bottom_offset: 150.0,
            close_offset_x: 4.0,
            close_offset_y: 50.0,
        }
    }
}

impl OverlayGeometry {
    /// Where the button sits before the user ever moves it: right edge,
    /// `bottom_offset` above the bottom.
    pub fn initial_position(&self, viewport: Viewport) -> Position {
        let bounds = Bounds::new(viewport, self);
        bounds.clamp(Position::new(
            bounds.max_x,
            viewport.height - self.bottom_offset,
        ))
    }

    pub fn close_button_position(&self, button: Position) -> Position {
        Position::new(
            button.x + self.close_offset_x,
            button.y - self.close_offset_y,
        )
    }
}

/// Allowed range for the top-left corner of the button.
///
/// `min_x <= max_x` and `min_y <= max_y` always hold; on a viewport too small
/// for the button the range collapses onto its minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn new(viewport: Viewport, geometry: &OverlayGeometry) -> Self {
        let min_x = finite_or_zero(geometry.padding);
        let min_y = finite_or_zero(geometry.top_inset);
        let max_x = finite_or_zero(viewport.width - geometry.control_size - geometry.padding);
        let max_y = finite_or_zero(viewport.height - geometry.bottom_offset);
        Self {
            min_x,
            max_x: max_x.max(min_x),
            min_y,
            max_y: max_y.max(min_y),
        }
    }

    pub fn clamp_x(&self, x: f32) -> f32 {
        clamp_axis(x, self.min_x, self.max_x)
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        clamp_axis(y, self.min_y, self.max_y)
    }

    pub fn clamp(&self, p: Position) -> Position {
        Position::new(self.clamp_x(p.x), self.clamp_y(p.y))
    }

    pub fn contains(&self, p: Position) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    pub fn is_collapsed(&self) -> bool {
        self.min_x == self.max_x || self.min_y == self.max_y
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

// NaN input lands on `min`.
fn clamp_axis(v: f32, min: f32, max: f32) -> f32 {
    if v.is_nan() {
        return min;
    }
    v.max(min).min(max)
}
