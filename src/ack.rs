use crate::capability::CapabilityFlags;
use crate::timer::{TimerHandle, Timers};

pub const DEFAULT_CHECK_DURATION_MS: u64 = 2000;

/// A boolean "acknowledged" state that reverts on its own after a fixed
/// duration. Re-acknowledging before the reset fires pushes the reset out
/// instead of stacking a second one.
#[derive(Debug)]
pub struct AckController {
    duration_ms: u64,
    acknowledged: bool,
    pending_reset: Option<TimerHandle>,
    timers: Timers,
    disposed: bool,
}

impl Default for AckController {
    fn default() -> Self {
        Self::new(DEFAULT_CHECK_DURATION_MS)
    }
}

impl AckController {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            acknowledged: false,
            pending_reset: None,
            timers: Timers::new(),
            disposed: false,
        }
    }

    pub fn acknowledge(&mut self, now_ms: u64) {
        if self.disposed {
            return;
        }
        self.acknowledged = true;
        // At most one reset may be outstanding.
        if let Some(prev) = self.pending_reset.take() {
            self.timers.cancel(prev);
        }
        let due = now_ms.saturating_add(self.duration_ms);
        self.pending_reset = Some(self.timers.schedule(due));
        tracing::debug!(now_ms, due, "acknowledged");
    }

    /// Run the reset if it is due. Returns `true` when the state flipped back.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let mut reset = false;
        for handle in self.timers.take_due(now_ms) {
            if self.pending_reset == Some(handle) {
                self.acknowledged = false;
                self.pending_reset = None;
                reset = true;
            }
        }
        reset
    }

    /// Cancel the pending reset; the controller ignores everything afterwards.
    pub fn dispose(&mut self) {
        self.timers.cancel_all();
        self.pending_reset = None;
        self.disposed = true;
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset.is_some()
    }

    pub fn pending_resets(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_due()
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

/// Non-blocking, user-visible failure notifications.
pub trait Notifier {
    fn notify_failure(&mut self, message: &str);
}

/// Collects failures in memory; useful for headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub failures: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify_failure(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}

pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// System clipboard through `arboard`.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardWriter for ArboardClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        if let Some(cb) = self.inner.as_mut() {
            cb.set_text(text.to_string())?;
        }
        Ok(())
    }
}

pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Copied,
    /// Disabled or no clipboard backend; nothing happened.
    Skipped,
    Failed(String),
}

/// The "copy to clipboard" affordance: a one-shot write guarded by an
/// enabled flag, acknowledged for a while on success.
pub struct CopyAction {
    text: String,
    enabled: bool,
    clipboard: Option<Box<dyn ClipboardWriter>>,
    ack: AckController,
}

impl CopyAction {
    pub fn new(
        text: impl Into<String>,
        enabled: bool,
        clipboard: Option<Box<dyn ClipboardWriter>>,
        duration_ms: u64,
    ) -> Self {
        Self {
            text: text.into(),
            enabled,
            clipboard,
            ack: AckController::new(duration_ms),
        }
    }

    /// Copy action backed by the system clipboard when the probe found one.
    pub fn with_system_clipboard(
        text: impl Into<String>,
        enabled: bool,
        flags: CapabilityFlags,
        duration_ms: u64,
    ) -> Self {
        let clipboard: Option<Box<dyn ClipboardWriter>> = if flags.clipboard_available {
            Some(Box::new(ArboardClipboard::default()))
        } else {
            if enabled {
                tracing::warn!("copy to clipboard requested but no clipboard backend is available");
            }
            None
        };
        Self::new(text, enabled, clipboard, duration_ms)
    }

    pub fn commit(&mut self, now_ms: u64, notifier: &mut dyn Notifier) -> CommitOutcome {
        if !self.enabled {
            return CommitOutcome::Skipped;
        }
        let Some(clipboard) = self.clipboard.as_mut() else {
            return CommitOutcome::Skipped;
        };
        match clipboard.set_text(&self.text) {
            Ok(()) => {
                self.ack.acknowledge(now_ms);
                CommitOutcome::Copied
            }
            Err(e) => {
                tracing::warn!("clipboard write failed: {e}");
                notifier.notify_failure(COPY_FAILED_MESSAGE);
                CommitOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn poll(&mut self, now_ms: u64) -> bool {
        self.ack.poll(now_ms)
    }

    pub fn dispose(&mut self) {
        self.ack.dispose();
    }

    /// Hidden when disabled or when there is nothing to write to.
    pub fn is_visible(&self) -> bool {
        self.enabled && self.clipboard.is_some()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_acknowledged(&self) -> bool {
        self.ack.is_acknowledged()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.ack.next_deadline()
    }

    pub fn accessibility_label(&self) -> &'static str {
        if self.is_acknowledged() {
            "Copied to clipboard"
        } else {
            "Copy to clipboard"
        }
    }

    pub fn glyph(&self) -> &'static str {
        if self.is_acknowledged() {
            "✅"
        } else {
            "📋"
        }
    }
}

impl Drop for CopyAction {
    fn drop(&mut self) {
        self.ack.dispose();
    }
}
