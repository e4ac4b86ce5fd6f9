mod copy_item;
mod demo;
mod floating_button;

pub use copy_item::copy_item;
pub use demo::DemoApp;
pub use floating_button::{show_floating_button, DragTracker};

use crate::ack::Notifier;
use crate::capability::CapabilityFlags;
use crate::overlay::Viewport;
use crate::presentation::FloatingButton;
use crate::settings::OverlaySettings;
use crate::toast_log::append_toast_log;
use eframe::egui::{self, Context};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

/// What the floating button needs from the panel that hosts it.
pub trait OverlayHost {
    fn open_modal(&mut self);
    fn hide_icon(&mut self);
    fn logs_length(&self) -> usize;
}

fn push_toast(toasts: &mut Toasts, toast: Toast) {
    append_toast_log(toast.text.text());
    toasts.add(toast);
}

/// [`Notifier`] backed by egui toasts and the toast log.
pub struct ToastNotifier<'a> {
    toasts: &'a mut Toasts,
    enabled: bool,
    duration: f64,
}

impl Notifier for ToastNotifier<'_> {
    fn notify_failure(&mut self, message: &str) {
        if !self.enabled {
            append_toast_log(message);
            return;
        }
        push_toast(
            self.toasts,
            Toast {
                text: message.into(),
                kind: ToastKind::Error,
                options: ToastOptions::default().duration_in_seconds(self.duration),
            },
        );
    }
}

pub const BACKDROP_ID: &str = "log_overlay_backdrop";

/// Dimmed full-screen layer that swallows pointer input.
fn show_backdrop(ctx: &Context) {
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new(BACKDROP_ID))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.allocate_rect(screen, egui::Sense::click_and_drag());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(128));
        });
}

pub fn viewport_of(ctx: &Context) -> Viewport {
    let rect = ctx.screen_rect();
    Viewport::new(rect.width(), rect.height())
}

/// Frame time in milliseconds, the clock every timed state runs on.
pub fn now_ms(ctx: &Context) -> u64 {
    let secs = ctx.input(|i| i.time);
    if secs.is_finite() && secs > 0.0 {
        (secs * 1000.0) as u64
    } else {
        0
    }
}

/// The floating button plus its alerts and toasts, ready to draw on top of
/// any egui app.
pub struct OverlayUi {
    button: FloatingButton,
    drag: DragTracker,
    alert: Option<String>,
    toasts: Toasts,
    enable_toasts: bool,
    toast_duration: f64,
    viewport: Viewport,
}

impl OverlayUi {
    pub fn new(ctx: &Context, settings: &OverlaySettings, flags: CapabilityFlags) -> Self {
        let viewport = viewport_of(ctx);
        let button = FloatingButton::mount(
            settings.overlay_config(),
            flags,
            viewport,
            settings.geometry,
            settings.spring,
        );
        let mut ui = Self {
            button,
            drag: DragTracker::default(),
            alert: None,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_seconds(),
            viewport,
        };
        ui.collect_error();
        ui
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.button.set_draggable(draggable);
        self.collect_error();
    }

    pub fn button(&self) -> &FloatingButton {
        &self.button
    }

    pub fn button_mut(&mut self) -> &mut FloatingButton {
        &mut self.button
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// `true` while the missing-libraries alert waits for the user.
    pub fn is_blocking(&self) -> bool {
        self.alert.is_some()
    }

    pub fn notifier(&mut self) -> ToastNotifier<'_> {
        ToastNotifier {
            toasts: &mut self.toasts,
            enabled: self.enable_toasts,
            duration: self.toast_duration,
        }
    }

    pub fn show(&mut self, ctx: &Context, host: &mut dyn OverlayHost) {
        let viewport = viewport_of(ctx);
        if viewport != self.viewport {
            self.viewport = viewport;
            self.button.resize(viewport);
        }

        let dt = ctx.input(|i| i.stable_dt);
        if self.button.tick(dt) {
            ctx.request_repaint();
        }

        // The alert is modal: nothing underneath takes input until dismissed.
        if self.is_blocking() {
            show_backdrop(ctx);
        } else {
            show_floating_button(ctx, &mut self.button, &mut self.drag, host);
        }
        self.show_alert(ctx);
        self.toasts.show(ctx);
    }

    fn collect_error(&mut self) {
        if let Some(e) = self.button.take_error() {
            self.alert = Some(e.to_string());
        }
    }

    fn show_alert(&mut self, ctx: &Context) {
        let Some(message) = self.alert.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Area::new(egui::Id::new("log_overlay_alert"))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Frame::window(&ctx.style()).show(ui, |ui| {
                    ui.set_max_width(320.0);
                    ui.heading("Missing Libraries");
                    ui.separator();
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            self.alert = None;
        }
    }
}
