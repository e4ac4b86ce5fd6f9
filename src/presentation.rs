//! Chooses how the floating button is presented and owns whichever
//! presentation is active.

use crate::capability::CapabilityFlags;
use crate::overlay::{
    EventOutcome, OverlayController, OverlayGeometry, PanEvent, Position, SpringSpec,
    StaticPlacement, Viewport,
};
use crate::settings::OverlayConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Static,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error(
        "Missing capabilities: dragging requires the \"drag-gestures\" and \"spring-animation\" \
         features, which are not available.\n\nRebuild with:\n\n\
         cargo build --features drag-gestures,spring-animation\n\n\
         and make sure LOG_OVERLAY_DISABLE_GESTURES is not set."
    )]
    MissingGestureBackend,
}

pub fn select(config: &OverlayConfig, flags: &CapabilityFlags) -> Result<Mode, ConfigurationError> {
    match (config.draggable, flags.gesture_backend_available) {
        (true, false) => Err(ConfigurationError::MissingGestureBackend),
        (true, true) => Ok(Mode::Interactive),
        (false, _) => Ok(Mode::Static),
    }
}

#[derive(Debug, Clone)]
pub enum Presentation {
    Interactive(OverlayController),
    Static(StaticPlacement),
}

/// The floating log button: picks a presentation on mount and again whenever
/// `draggable` changes.
///
/// A configuration error leaves the static presentation in place and is
/// handed out once through [`FloatingButton::take_error`].
#[derive(Debug)]
pub struct FloatingButton {
    config: OverlayConfig,
    flags: CapabilityFlags,
    viewport: Viewport,
    geometry: OverlayGeometry,
    spring: SpringSpec,
    presentation: Presentation,
    pending_error: Option<ConfigurationError>,
}

impl FloatingButton {
    pub fn mount(
        config: OverlayConfig,
        flags: CapabilityFlags,
        viewport: Viewport,
        geometry: OverlayGeometry,
        spring: SpringSpec,
    ) -> Self {
        let mut button = Self {
            config,
            flags,
            viewport,
            geometry,
            spring,
            presentation: Presentation::Static(StaticPlacement::new(viewport, &geometry)),
            pending_error: None,
        };
        button.evaluate();
        button
    }

    /// Change `draggable`; a no-op when the value is unchanged.
    pub fn set_draggable(&mut self, draggable: bool) {
        if self.config.draggable == draggable {
            return;
        }
        self.config.draggable = draggable;
        self.evaluate();
    }

    pub fn set_enable_device_shake(&mut self, enabled: bool) {
        self.config.enable_device_shake = enabled;
    }

    /// The configuration error raised by the last evaluation, if it has not
    /// been taken yet.
    pub fn take_error(&mut self) -> Option<ConfigurationError> {
        self.pending_error.take()
    }

    pub fn mode(&self) -> Mode {
        match self.presentation {
            Presentation::Interactive(_) => Mode::Interactive,
            Presentation::Static(_) => Mode::Static,
        }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn config(&self) -> OverlayConfig {
        self.config
    }

    pub fn handle_pan(&mut self, event: PanEvent) -> EventOutcome {
        match &mut self.presentation {
            Presentation::Interactive(controller) => controller.handle(event),
            Presentation::Static(_) => EventOutcome::Ignored,
        }
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        match &mut self.presentation {
            Presentation::Interactive(controller) => controller.tick(dt),
            Presentation::Static(_) => false,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        match &mut self.presentation {
            Presentation::Interactive(controller) => controller.resize(viewport),
            Presentation::Static(placement) => {
                *placement = StaticPlacement::new(viewport, &self.geometry);
            }
        }
    }

    pub fn dispose(&mut self) {
        if let Presentation::Interactive(controller) = &mut self.presentation {
            controller.dispose();
        }
    }

    pub fn position(&self) -> Position {
        match &self.presentation {
            Presentation::Interactive(controller) => controller.position(),
            Presentation::Static(placement) => placement.position(),
        }
    }

    pub fn close_button_position(&self) -> Position {
        match &self.presentation {
            Presentation::Interactive(controller) => controller.close_button_position(),
            Presentation::Static(placement) => placement.close_button_position(),
        }
    }

    pub fn opacity(&self) -> f32 {
        match &self.presentation {
            Presentation::Interactive(controller) => controller.opacity(),
            Presentation::Static(placement) => placement.opacity(),
        }
    }

    pub fn shows_close_button(&self) -> bool {
        self.config.enable_device_shake
    }

    pub fn is_animating(&self) -> bool {
        matches!(&self.presentation, Presentation::Interactive(c) if c.is_animating())
    }

    pub fn geometry(&self) -> &OverlayGeometry {
        &self.geometry
    }

    fn evaluate(&mut self) {
        // An error nobody took no longer describes the current config.
        self.pending_error = None;
        let mode = match select(&self.config, &self.flags) {
            Ok(mode) => mode,
            Err(e) => {
                tracing::error!("{e}");
                self.pending_error = Some(e);
                Mode::Static
            }
        };
        tracing::debug!(?mode, draggable = self.config.draggable, "presentation selected");
        self.presentation = match mode {
            Mode::Interactive => Presentation::Interactive(OverlayController::new(
                self.viewport,
                self.geometry,
                self.spring,
            )),
            Mode::Static => Presentation::Static(StaticPlacement::new(self.viewport, &self.geometry)),
        };
    }
}

/// Text shown on the log button.
pub fn button_label(logs_length: usize) -> String {
    format!("📊 {logs_length}")
}
