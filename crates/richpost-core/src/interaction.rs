//! Interaction state for display surfaces.
//!
//! The display surface owns one modal overlay and re-binds media
//! elements after every content change. Both concerns used to be
//! coordinated through ad-hoc timers and flags; here they are explicit
//! machines with guarded transitions:
//!
//! - [`ModalMachine`] - {Closed, Open, Closing} with a fixed closing
//!   delay, so a double-click during the close transition cannot
//!   reopen the modal.
//! - [`DebounceGate`] - collapses a burst of open-intents into one.
//! - [`BindRegistry`] - tracks which rendered media elements already
//!   have a click handler, making re-scans idempotent.
//!
//! All time is passed in as milliseconds so the machines are pure and
//! natively testable; callers supply the wall clock.

use std::collections::HashSet;

// =============================================================================
// Modal Machine
// =============================================================================

/// Lifecycle phase of the media modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Open,
    /// Close was requested; reopening is blocked until the closing
    /// delay elapses.
    Closing,
}

/// Modal lifecycle machine with explicit transition guards.
#[derive(Debug, Clone)]
pub struct ModalMachine {
    phase: ModalPhase,
    closing_since: Option<u64>,
    closing_delay_ms: u64,
}

impl ModalMachine {
    pub fn new(closing_delay_ms: u64) -> Self {
        Self {
            phase: ModalPhase::Closed,
            closing_since: None,
            closing_delay_ms,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Try to open the modal. Allowed from `Closed`, or from `Closing`
    /// once the delay has elapsed; an open intent during the close
    /// transition is dropped.
    pub fn request_open(&mut self, now_ms: u64) -> bool {
        self.settle(now_ms);
        match self.phase {
            ModalPhase::Closed => {
                self.phase = ModalPhase::Open;
                true
            }
            ModalPhase::Open | ModalPhase::Closing => false,
        }
    }

    /// Close the modal. Closing is synchronous and immediate; the
    /// machine stays in `Closing` for the fixed delay.
    pub fn close(&mut self, now_ms: u64) {
        if self.phase == ModalPhase::Open {
            self.phase = ModalPhase::Closing;
            self.closing_since = Some(now_ms);
        }
    }

    /// Advance `Closing` to `Closed` once the delay has passed.
    pub fn settle(&mut self, now_ms: u64) {
        if self.phase == ModalPhase::Closing
            && let Some(since) = self.closing_since
            && now_ms.saturating_sub(since) >= self.closing_delay_ms
        {
            self.phase = ModalPhase::Closed;
            self.closing_since = None;
        }
    }
}

// =============================================================================
// Debounce Gate
// =============================================================================

/// Collapses a burst of duplicate intents within a window into one.
#[derive(Debug, Clone)]
pub struct DebounceGate {
    window_ms: u64,
    last_pass: Option<u64>,
}

impl DebounceGate {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_pass: None,
        }
    }

    /// Returns true if the intent may pass, arming the window.
    pub fn try_pass(&mut self, now_ms: u64) -> bool {
        match self.last_pass {
            Some(last) if now_ms.saturating_sub(last) < self.window_ms => false,
            _ => {
                self.last_pass = Some(now_ms);
                true
            }
        }
    }
}

// =============================================================================
// Bind Registry
// =============================================================================

/// Record of media elements that already have a click handler.
///
/// The rendered tree is replaced wholesale on each content change, so
/// the owning surface must [`reset`](Self::reset) the registry whenever
/// it re-renders; within one rendered tree, repeated scans bind each
/// element exactly once.
#[derive(Debug, Default)]
pub struct BindRegistry {
    bound: HashSet<String>,
}

impl BindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Of the keys currently present, the ones not yet bound.
    pub fn plan<'a>(&self, present: &'a [String]) -> Vec<&'a str> {
        present
            .iter()
            .filter(|key| !self.bound.contains(key.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn mark_bound(&mut self, key: &str) {
        self.bound.insert(key.to_string());
    }

    pub fn is_bound(&self, key: &str) -> bool {
        self.bound.contains(key)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Forget everything; call when the rendered tree is replaced.
    pub fn reset(&mut self) {
        self.bound.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_reopen_cycle() {
        let mut machine = ModalMachine::new(300);
        assert!(machine.request_open(1_000));
        assert_eq!(machine.phase(), ModalPhase::Open);

        // Already open: further intents are dropped.
        assert!(!machine.request_open(1_050));

        machine.close(2_000);
        assert_eq!(machine.phase(), ModalPhase::Closing);

        // Double-click during the close transition must not reopen.
        assert!(!machine.request_open(2_100));

        // After the delay the next intent goes through.
        assert!(machine.request_open(2_400));
        assert_eq!(machine.phase(), ModalPhase::Open);
    }

    #[test]
    fn test_close_only_from_open() {
        let mut machine = ModalMachine::new(300);
        machine.close(500);
        assert_eq!(machine.phase(), ModalPhase::Closed);
    }

    #[test]
    fn test_rejected_open_leaves_gate_unarmed() {
        // Guard order for an open intent: machine first, gate second.
        // An intent dropped while the modal is closing must not arm the
        // debounce window, or the retry after settling would be blocked.
        let mut machine = ModalMachine::new(300);
        let mut gate = DebounceGate::new(500);

        assert!(machine.request_open(1_000));
        assert!(gate.try_pass(1_000));
        machine.close(2_000);

        // Click during the close transition: machine rejects, gate is
        // never consulted.
        machine.settle(2_100);
        assert_eq!(machine.phase(), ModalPhase::Closing);

        // Retry after the settle delay goes through both guards.
        assert!(machine.request_open(2_400));
        assert!(gate.try_pass(2_400));
    }

    #[test]
    fn test_debounce_collapses_burst() {
        let mut gate = DebounceGate::new(500);
        assert!(gate.try_pass(1_000));
        assert!(!gate.try_pass(1_100));
        assert!(!gate.try_pass(1_499));
        assert!(gate.try_pass(1_500));
    }

    #[test]
    fn test_rescan_binds_exactly_the_new_element() {
        let mut registry = BindRegistry::new();
        let first_scan = vec!["video_a".to_string()];
        assert_eq!(registry.plan(&first_scan), vec!["video_a"]);
        registry.mark_bound("video_a");

        // Second scan: one already bound, one new.
        let second_scan = vec!["video_a".to_string(), "video_b".to_string()];
        let to_bind = registry.plan(&second_scan);
        assert_eq!(to_bind, vec!["video_b"]);
        registry.mark_bound("video_b");
        assert_eq!(registry.len(), 2);

        // Third scan: nothing left to bind.
        assert!(registry.plan(&second_scan).is_empty());
    }

    #[test]
    fn test_registry_reset_on_rerender() {
        let mut registry = BindRegistry::new();
        registry.mark_bound("video_a");
        registry.reset();
        assert!(!registry.is_bound("video_a"));
        assert!(registry.is_empty());
    }
}
