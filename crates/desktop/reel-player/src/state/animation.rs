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

//! Time-driven values for the overlay fade and the loading spinner.

use std::time::{Duration, Instant};

/// Period of one full loader revolution.
pub const SPINNER_PERIOD: Duration = Duration::from_millis(1500);

/// Linear opacity fade for the control overlay.
///
/// Retargeting while a fade runs starts the new fade from the opacity shown
/// at that instant, so reversals never jump.
#[derive(Debug, Clone, Copy)]
pub struct ControlFade {
    duration: Duration,
    from:     f32,
    to:       f32,
    started:  Option<Instant>,
}

impl ControlFade {
    /// Creates a settled fade at `visible ? 1 : 0`.
    pub fn new(duration: Duration, visible: bool) -> Self {
        let value = if visible { 1.0 } else { 0.0 };
        Self {
            duration,
            from: value,
            to: value,
            started: None,
        }
    }

    pub fn target(&self) -> f32 { self.to }

    /// Starts fading towards fully visible or fully hidden.
    pub fn fade_to(&mut self, visible: bool, now: Instant) {
        let target = if visible { 1.0 } else { 0.0 };
        if (self.to - target).abs() < f32::EPSILON {
            return;
        }
        if self.duration.is_zero() {
            self.from = target;
            self.to = target;
            self.started = None;
            return;
        }
        self.from = self.value(now);
        self.to = target;
        self.started = Some(now);
    }

    /// Opacity at `now`, in `[0, 1]`.
    pub fn value(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.to;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32;
        (self.to - self.from).mul_add(t, self.from).clamp(0.0, 1.0)
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) < self.duration)
    }

    /// Drops the running fade and settles at its target.
    pub fn settle(&mut self) {
        self.from = self.to;
        self.started = None;
    }
}

/// Loading spinner rotation.
///
/// Only turns while `loading` is set; the owner stops requesting frames once
/// [`Spinner::is_active`] goes false.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spinner {
    started: Option<Instant>,
}

impl Spinner {
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn stop(&mut self) { self.started = None; }

    pub fn is_active(&self) -> bool { self.started.is_some() }

    /// Rotation in turns, in `[0, 1)`.
    pub fn angle(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(started).as_secs_f64();
        (elapsed / SPINNER_PERIOD.as_secs_f64()).fract() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE: Duration = Duration::from_millis(500);

    #[test]
    fn test_fade_is_linear() {
        let t0 = Instant::now();
        let mut fade = ControlFade::new(FADE, true);
        fade.fade_to(false, t0);

        assert!((fade.value(t0) - 1.0).abs() < 1e-4);
        assert!((fade.value(t0 + FADE / 2) - 0.5).abs() < 1e-3);
        assert!(fade.value(t0 + FADE).abs() < 1e-4);
        assert!(!fade.is_running(t0 + FADE));
    }

    #[test]
    fn test_reversal_starts_from_current_opacity() {
        let t0 = Instant::now();
        let mut fade = ControlFade::new(FADE, true);
        fade.fade_to(false, t0);

        let mid = t0 + Duration::from_millis(100);
        let shown = fade.value(mid);
        fade.fade_to(true, mid);
        assert!((fade.value(mid) - shown).abs() < 1e-4);
        assert!(fade.is_running(mid));
        assert!((fade.value(mid + FADE) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let t0 = Instant::now();
        let mut fade = ControlFade::new(Duration::ZERO, false);
        fade.fade_to(true, t0);
        assert!(!fade.is_running(t0));
        assert!((fade.value(t0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_settled_fade_to_same_target_is_noop() {
        let t0 = Instant::now();
        let mut fade = ControlFade::new(FADE, true);
        fade.fade_to(true, t0);
        assert!(!fade.is_running(t0));
    }

    #[test]
    fn test_spinner_wraps_each_period() {
        let t0 = Instant::now();
        let mut spinner = Spinner::default();
        assert!((spinner.angle(t0)).abs() < f32::EPSILON);

        spinner.start(t0);
        assert!((spinner.angle(t0 + SPINNER_PERIOD / 4) - 0.25).abs() < 1e-4);
        assert!((spinner.angle(t0 + SPINNER_PERIOD + SPINNER_PERIOD / 2) - 0.5).abs() < 1e-4);

        spinner.stop();
        assert!(!spinner.is_active());
    }
}
