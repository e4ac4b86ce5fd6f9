/// Handle to a scheduled deferred callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Entry {
    handle: TimerHandle,
    due_ms: u64,
}

/// Cancellable deferred callbacks driven by explicit timestamps.
///
/// Nothing fires on its own: the owner calls [`Timers::take_due`] with the
/// current time and runs whatever comes back.
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: u64) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { handle, due_ms });
        handle
    }

    /// Returns `false` when the handle already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Remove and return every entry due at `now_ms`, earliest first.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<TimerHandle> {
        let mut due: Vec<Entry> = self
            .entries
            .iter()
            .copied()
            .filter(|e| e.due_ms <= now_ms)
            .collect();
        if due.is_empty() {
            return Vec::new();
        }
        self.entries.retain(|e| e.due_ms > now_ms);
        due.sort_by_key(|e| (e.due_ms, e.handle.0));
        due.into_iter().map(|e| e.handle).collect()
    }

    pub fn next_due(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due_ms).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
