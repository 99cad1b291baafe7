// Copyright 2025 Crrow
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Single-tap / double-tap disambiguation.

use std::time::{Duration, Instant};

/// Gesture resolved from one or two taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    SingleTap,
    DoubleTap,
}

/// Defers a single tap until the double-tap window passes.
///
/// A second tap inside the window resolves to [`TapAction::DoubleTap`] and
/// swallows the pending single tap.
#[derive(Debug, Clone)]
pub struct TapDetector {
    threshold: Duration,
    pending:   Option<Instant>,
}

impl TapDetector {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            pending: None,
        }
    }

    pub fn threshold(&self) -> Duration { self.threshold }

    pub fn is_pending(&self) -> bool { self.pending.is_some() }

    /// When the pending single tap resolves, if any.
    pub fn deadline(&self) -> Option<Instant> { self.pending.map(|at| at + self.threshold) }

    /// Registers a tap.
    ///
    /// Returns an action resolved right away: a double tap, or (with a zero
    /// threshold) the single tap itself. Otherwise the tap waits for
    /// [`TapDetector::poll`].
    pub fn on_tap(&mut self, now: Instant) -> Option<TapAction> {
        if self.threshold.is_zero() {
            return Some(TapAction::SingleTap);
        }
        match self.pending.take() {
            Some(first) if now.saturating_duration_since(first) < self.threshold => {
                Some(TapAction::DoubleTap)
            }
            // A stale tap nobody polled for: this one starts a new window.
            _ => {
                self.pending = Some(now);
                None
            }
        }
    }

    /// Resolves the pending tap once the window elapsed with no second tap.
    pub fn poll(&mut self, now: Instant) -> Option<TapAction> {
        match self.deadline() {
            Some(at) if now >= at => {
                self.pending = None;
                Some(TapAction::SingleTap)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) { self.pending = None; }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test_case(0 ; "same instant")]
    #[test_case(120 ; "well inside window")]
    #[test_case(299 ; "edge of window")]
    fn test_second_tap_inside_window_is_double(gap_ms: u64) {
        let t0 = Instant::now();
        let mut taps = TapDetector::new(WINDOW);
        assert_eq!(taps.on_tap(t0), None);
        assert_eq!(
            taps.on_tap(t0 + Duration::from_millis(gap_ms)),
            Some(TapAction::DoubleTap)
        );
        assert!(!taps.is_pending());
        // The swallowed single tap never resolves.
        assert_eq!(taps.poll(t0 + WINDOW * 10), None);
    }

    #[test]
    fn test_single_tap_resolves_after_silence() {
        let t0 = Instant::now();
        let mut taps = TapDetector::new(WINDOW);
        assert_eq!(taps.on_tap(t0), None);
        assert_eq!(taps.deadline(), Some(t0 + WINDOW));
        assert_eq!(taps.poll(t0 + WINDOW - Duration::from_millis(1)), None);
        assert_eq!(taps.poll(t0 + WINDOW), Some(TapAction::SingleTap));
        assert_eq!(taps.poll(t0 + WINDOW * 2), None);
    }

    #[test]
    fn test_late_second_tap_opens_new_window() {
        let t0 = Instant::now();
        let mut taps = TapDetector::new(WINDOW);
        taps.on_tap(t0);
        let late = t0 + WINDOW + Duration::from_millis(50);
        assert_eq!(taps.on_tap(late), None);
        assert_eq!(taps.deadline(), Some(late + WINDOW));
    }

    #[test]
    fn test_zero_threshold_resolves_immediately() {
        let mut taps = TapDetector::new(Duration::ZERO);
        assert_eq!(taps.on_tap(Instant::now()), Some(TapAction::SingleTap));
        assert!(!taps.is_pending());
    }
}
