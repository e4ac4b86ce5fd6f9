use super::{copy_item, now_ms, OverlayHost, OverlayUi};
use crate::ack::CopyAction;
use crate::capability::CapabilityFlags;
use crate::settings::OverlaySettings;
use eframe::egui::{self, Context};

struct LogEntry {
    text: String,
    copy: CopyAction,
}

/// Host panel state seen by the floating button.
struct PanelState {
    entries: Vec<LogEntry>,
    panel_open: bool,
    icon_hidden: bool,
}

impl OverlayHost for PanelState {
    fn open_modal(&mut self) {
        tracing::debug!("opening log panel");
        self.panel_open = true;
    }

    fn hide_icon(&mut self) {
        tracing::debug!("hiding overlay icon");
        self.icon_hidden = true;
    }

    fn logs_length(&self) -> usize {
        self.entries.len()
    }
}

/// Small eframe app showing the overlay over a fake log panel.
pub struct DemoApp {
    settings: OverlaySettings,
    flags: CapabilityFlags,
    overlay: OverlayUi,
    panel: PanelState,
    draggable: bool,
}

impl DemoApp {
    pub fn new(ctx: &Context, settings: OverlaySettings, flags: CapabilityFlags) -> Self {
        let overlay = OverlayUi::new(ctx, &settings, flags);
        let draggable = settings.draggable;
        let mut app = Self {
            settings,
            flags,
            overlay,
            panel: PanelState {
                entries: Vec::new(),
                panel_open: false,
                icon_hidden: false,
            },
            draggable,
        };
        for text in ["GET /api/health 200", "POST /api/login 401", "GET /api/logs 200"] {
            app.push_entry(text.to_string());
        }
        app
    }

    fn push_entry(&mut self, text: String) {
        let copy = CopyAction::with_system_clipboard(
            text.clone(),
            self.settings.copy_to_clipboard,
            self.flags,
            self.settings.check_duration_ms,
        );
        self.panel.entries.push(LogEntry { text, copy });
    }

    fn log_panel(&mut self, ctx: &Context) {
        if !self.panel.panel_open {
            return;
        }
        let now = now_ms(ctx);
        let mut open = true;
        let entries = &mut self.panel.entries;
        let overlay = &mut self.overlay;
        egui::Window::new("Logs")
            .open(&mut open)
            .collapsible(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for entry in entries.iter_mut() {
                        ui.horizontal(|ui| {
                            ui.monospace(entry.text.as_str());
                            let mut notifier = overlay.notifier();
                            copy_item(ui, &mut entry.copy, now, &mut notifier);
                        });
                    }
                });
            });
        self.panel.panel_open = open;
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Log overlay demo");
            if ui.button("Add log entry").clicked() {
                let n = self.panel.entries.len() + 1;
                self.push_entry(format!("GET /api/items/{n} 200"));
            }
            if ui.checkbox(&mut self.draggable, "Draggable").changed() {
                self.overlay.set_draggable(self.draggable);
            }
            let mut shake = self.overlay.button().config().enable_device_shake;
            if ui.checkbox(&mut shake, "Show close button").changed() {
                self.overlay.button_mut().set_enable_device_shake(shake);
            }
            if self.panel.icon_hidden && ui.button("Show icon").clicked() {
                self.panel.icon_hidden = false;
            }
        });

        self.log_panel(ctx);

        if !self.panel.icon_hidden {
            self.overlay.show(ctx, &mut self.panel);
        }
    }
}
