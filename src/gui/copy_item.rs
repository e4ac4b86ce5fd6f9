use crate::ack::{CopyAction, Notifier};
use eframe::egui::{self, RichText};

/// Draw the copy button for `action`. Draws nothing when copying is
/// disabled or there is no clipboard.
pub fn copy_item(
    ui: &mut egui::Ui,
    action: &mut CopyAction,
    now_ms: u64,
    notifier: &mut dyn Notifier,
) -> Option<egui::Response> {
    action.poll(now_ms);
    if !action.is_visible() {
        return None;
    }
    let button = egui::Button::new(RichText::new(action.glyph()).size(20.0)).frame(false);
    let response = ui.add(button).on_hover_text(action.accessibility_label());
    if response.clicked() {
        action.commit(now_ms, notifier);
    }
    if let Some(deadline) = action.next_deadline() {
        ui.ctx().request_repaint_after(std::time::Duration::from_millis(
            deadline.saturating_sub(now_ms),
        ));
    }
    Some(response)
}
