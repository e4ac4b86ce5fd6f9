use crate::overlay::geometry::OverlayGeometry;
use crate::overlay::spring::SpringSpec;
use serde::{Deserialize, Serialize};

/// Caller configuration of the floating button itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayConfig {
    pub draggable: bool,
    pub enable_device_shake: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OverlaySettings {
    /// Let the user drag the button around. Requires the gesture backend.
    #[serde(default)]
    pub draggable: bool,
    /// Show the close button above the log button.
    #[serde(default)]
    pub enable_device_shake: bool,
    /// Show the copy affordance next to copyable log entries.
    #[serde(default)]
    pub copy_to_clipboard: bool,
    /// How long the copy button shows its "copied" state, in milliseconds.
    #[serde(default = "default_check_duration")]
    pub check_duration_ms: u64,
    #[serde(default)]
    pub geometry: OverlayGeometry,
    #[serde(default)]
    pub spring: SpringSpec,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional file receiving log output in addition to stdout.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
}

fn default_check_duration() -> u64 {
    2000
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            draggable: false,
            enable_device_shake: false,
            copy_to_clipboard: false,
            check_duration_ms: default_check_duration(),
            geometry: OverlayGeometry::default(),
            spring: SpringSpec::default(),
            debug_logging: false,
            log_file: None,
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
        }
    }
}

impl OverlaySettings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn overlay_config(&self) -> OverlayConfig {
        OverlayConfig {
            draggable: self.draggable,
            enable_device_shake: self.enable_device_shake,
        }
    }

    /// Toast duration clamped to something egui-toast can display.
    pub fn toast_seconds(&self) -> f64 {
        if self.toast_duration.is_finite() && self.toast_duration > 0.0 {
            self.toast_duration as f64
        } else {
            tracing::warn!(
                "toast_duration {} is invalid; using default {}",
                self.toast_duration,
                default_toast_duration()
            );
            default_toast_duration() as f64
        }
    }
}
