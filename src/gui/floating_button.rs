use super::OverlayHost;
use crate::overlay::{PanEvent, Position};
use crate::presentation::{button_label, FloatingButton};
use eframe::egui::{self, Color32, Context, Pos2, RichText};

const BUTTON_COLOR: Color32 = Color32::from_rgb(0, 122, 255);

/// Turns egui drag responses into pan events with cumulative translation.
#[derive(Debug, Default, Clone, Copy)]
pub struct DragTracker {
    origin: Option<Pos2>,
}

impl DragTracker {
    pub fn feed(
        &mut self,
        started: bool,
        dragging: bool,
        stopped: bool,
        pointer: Option<Pos2>,
    ) -> Vec<PanEvent> {
        let mut events = Vec::new();
        if started {
            if let Some(p) = pointer {
                self.origin = Some(p);
                events.push(PanEvent::Start);
            }
        }
        if dragging {
            if let (Some(origin), Some(p)) = (self.origin, pointer) {
                events.push(PanEvent::Update {
                    translation_x: p.x - origin.x,
                    translation_y: p.y - origin.y,
                });
            }
        }
        if stopped && self.origin.take().is_some() {
            events.push(PanEvent::End);
        }
        events
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}

fn to_pos2(p: Position) -> Pos2 {
    egui::pos2(p.x, p.y)
}

pub fn show_floating_button(
    ctx: &Context,
    button: &mut FloatingButton,
    drag: &mut DragTracker,
    host: &mut dyn OverlayHost,
) {
    let opacity = button.opacity();
    let size = button.geometry().control_size;

    if button.shows_close_button() {
        egui::Area::new(egui::Id::new("log_overlay_close"))
            .order(egui::Order::Foreground)
            .fixed_pos(to_pos2(button.close_button_position()))
            .show(ctx, |ui| {
                let close = egui::Button::new(RichText::new("✕").size(20.0).strong())
                    .frame(false)
                    .min_size(egui::vec2(size, size));
                if ui.add(close).on_hover_text("Hide").clicked() {
                    host.hide_icon();
                }
            });
    }

    let label = button_label(host.logs_length());
    let inner = egui::Area::new(egui::Id::new("log_overlay_button"))
        .order(egui::Order::Foreground)
        .fixed_pos(to_pos2(button.position()))
        .show(ctx, |ui| {
            let widget = egui::Button::new(
                RichText::new(label)
                    .color(Color32::WHITE.gamma_multiply(opacity))
                    .size(14.0)
                    .strong(),
            )
            .fill(BUTTON_COLOR.gamma_multiply(opacity))
            .rounding(25.0)
            .min_size(egui::vec2(size, size))
            .sense(egui::Sense::click_and_drag());
            ui.add(widget).on_hover_text("Open logs")
        });
    let response = inner.inner;

    if response.clicked() {
        host.open_modal();
    }

    let pointer = response
        .interact_pointer_pos()
        .or_else(|| ctx.input(|i| i.pointer.latest_pos()));
    for event in drag.feed(
        response.drag_started(),
        response.dragged(),
        response.drag_stopped(),
        pointer,
    ) {
        button.handle_pan(event);
    }
}
