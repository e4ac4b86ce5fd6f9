pub mod controller;
pub mod geometry;
pub mod placement;
pub mod spring;

pub use controller::{
    DragSession, EventOutcome, GesturePhase, OverlayController, PanEvent, SnapEdge,
};
pub use geometry::{Bounds, OverlayGeometry, Position, Viewport};
pub use placement::StaticPlacement;
pub use spring::{SpringAnimation, SpringSpec};
