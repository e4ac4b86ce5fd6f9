use super::geometry::{Bounds, OverlayGeometry, Position, Viewport};
use super::spring::{SpringAnimation, SpringSpec};

/// Pan gesture lifecycle as delivered by the input backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanEvent {
    Start,
    /// Cumulative translation since the matching `Start`.
    Update { translation_x: f32, translation_y: f32 },
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Applied,
    /// Out of order or duplicate; state untouched.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_x: f32,
    pub start_y: f32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapEdge {
    Left,
    Right,
}

pub const DRAGGING_OPACITY: f32 = 0.8;

/// Owns the button position in interactive mode.
///
/// Position only changes inside [`OverlayController::handle`] and
/// [`OverlayController::tick`], and is inside [`Bounds`] after each of them.
#[derive(Debug, Clone)]
pub struct OverlayController {
    viewport: Viewport,
    geometry: OverlayGeometry,
    spring: SpringSpec,
    bounds: Bounds,
    position: Position,
    session: Option<DragSession>,
    snap: Option<(SnapEdge, SpringAnimation)>,
    disposed: bool,
}

impl OverlayController {
    pub fn new(viewport: Viewport, geometry: OverlayGeometry, spring: SpringSpec) -> Self {
        let bounds = Bounds::new(viewport, &geometry);
        let position = geometry.initial_position(viewport);
        tracing::debug!(?viewport, ?bounds, ?position, "overlay controller created");
        Self {
            viewport,
            geometry,
            spring,
            bounds,
            position,
            session: None,
            snap: None,
            disposed: false,
        }
    }

    pub fn handle(&mut self, event: PanEvent) -> EventOutcome {
        if self.disposed {
            return EventOutcome::Ignored;
        }
        let outcome = match (event, self.session) {
            (PanEvent::Start, None) => {
                // A new drag takes over from an unfinished snap.
                self.snap = None;
                self.session = Some(DragSession {
                    start_x: self.position.x,
                    start_y: self.position.y,
                    is_active: true,
                });
                EventOutcome::Applied
            }
            (
                PanEvent::Update {
                    translation_x,
                    translation_y,
                },
                Some(session),
            ) => {
                self.position = self.bounds.clamp(Position::new(
                    session.start_x + translation_x,
                    session.start_y + translation_y,
                ));
                EventOutcome::Applied
            }
            (PanEvent::End, Some(_)) => {
                self.session = None;
                self.begin_snap();
                EventOutcome::Applied
            }
            _ => EventOutcome::Ignored,
        };
        if outcome == EventOutcome::Ignored {
            tracing::debug!(?event, phase = ?self.phase(), "ignoring pan event");
        }
        outcome
    }

    /// Advance the snap animation by `dt` seconds. Returns `true` while the
    /// position is still moving.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some((edge, anim)) = self.snap.as_mut() else {
            return false;
        };
        let edge = *edge;
        let value = anim.step(dt);
        let settled = anim.is_settled();
        self.position.x = self.bounds.clamp_x(value);
        if settled {
            self.position.x = self.edge_x(edge);
            self.snap = None;
            return false;
        }
        true
    }

    /// The edge a release at the current position snaps to.
    pub fn snap_edge(&self) -> SnapEdge {
        if self.position.x < self.viewport.center_x() {
            SnapEdge::Left
        } else {
            SnapEdge::Right
        }
    }

    /// Re-read the viewport after an external resize.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.bounds = Bounds::new(viewport, &self.geometry);
        self.position = self.bounds.clamp(self.position);
        if let Some((edge, _)) = self.snap {
            let target = self.edge_x(edge);
            self.snap = Some((
                edge,
                SpringAnimation::new(self.spring, self.position.x, target),
            ));
        }
    }

    /// Stop reacting to events; the controller is being unmounted.
    pub fn dispose(&mut self) {
        self.session = None;
        self.snap = None;
        self.disposed = true;
    }

    pub fn phase(&self) -> GesturePhase {
        if self.session.is_some() {
            GesturePhase::Dragging
        } else {
            GesturePhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.map(|s| s.is_active).unwrap_or(false)
    }

    pub fn is_animating(&self) -> bool {
        self.snap.is_some()
    }

    pub fn snap_target(&self) -> Option<f32> {
        self.snap.as_ref().map(|(_, anim)| anim.target())
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn close_button_position(&self) -> Position {
        self.geometry.close_button_position(self.position)
    }

    pub fn opacity(&self) -> f32 {
        if self.is_dragging() {
            DRAGGING_OPACITY
        } else {
            1.0
        }
    }

    fn begin_snap(&mut self) {
        let edge = self.snap_edge();
        let target = self.edge_x(edge);
        tracing::debug!(x = self.position.x, target, ?edge, "snapping to edge");
        let anim = SpringAnimation::new(self.spring, self.position.x, target);
        if anim.is_settled() {
            self.position.x = target;
        } else {
            self.snap = Some((edge, anim));
        }
    }

    fn edge_x(&self, edge: SnapEdge) -> f32 {
        match edge {
            SnapEdge::Left => self.bounds.min_x,
            SnapEdge::Right => self.bounds.max_x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> OverlayController {
        OverlayController::new(
            Viewport::new(390.0, 844.0),
            OverlayGeometry::default(),
            SpringSpec::default(),
        )
    }

    #[test]
    fn start_while_snapping_cancels_the_snap() {
        let mut c = controller();
        c.handle(PanEvent::Start);
        c.handle(PanEvent::Update {
            translation_x: -250.0,
            translation_y: 0.0,
        });
        c.handle(PanEvent::End);
        c.tick(0.05);
        assert!(c.is_animating());
        let x = c.position().x;

        assert_eq!(c.handle(PanEvent::Start), EventOutcome::Applied);
        assert!(!c.is_animating());
        assert_eq!(c.session().map(|s| s.start_x), Some(x));
    }

    #[test]
    fn disposed_controller_ignores_events() {
        let mut c = controller();
        let before = c.position();
        c.dispose();
        assert_eq!(c.handle(PanEvent::Start), EventOutcome::Ignored);
        assert_eq!(c.position(), before);
    }
}
