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

//! Auto-hide bookkeeping for the control overlay.

use std::time::{Duration, Instant};

/// Visibility of the control overlay.
///
/// ```text
///            tap / show                 deadline reached
///  Hidden ─────────────────▶ Visible(t) ─────────────────▶ Hidden
///                              │   ▲
///                    drag grant│   │drag release / tap
///                              ▼   │
///                           Visible(-)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Shown; hides itself once `hide_at` passes. `None` means the countdown
    /// is suspended (mid-drag, or not armed yet).
    Visible { hide_at: Option<Instant> },
    Hidden,
}

/// Control-overlay visibility timer.
///
/// Time is passed in explicitly; the owner polls [`ControlVisibility::poll`]
/// once [`ControlVisibility::deadline`] has passed.
#[derive(Debug, Clone)]
pub struct ControlVisibility {
    state: OverlayState,
    delay: Duration,
}

impl ControlVisibility {
    /// Creates the timer. A visible overlay starts without a countdown; it is
    /// armed once the video has loaded.
    pub fn new(delay: Duration, show_on_start: bool) -> Self {
        let state = if show_on_start {
            OverlayState::Visible { hide_at: None }
        } else {
            OverlayState::Hidden
        };
        Self { state, delay }
    }

    pub fn state(&self) -> OverlayState { self.state }

    pub fn delay(&self) -> Duration { self.delay }

    pub fn is_visible(&self) -> bool { matches!(self.state, OverlayState::Visible { .. }) }

    /// When the pending countdown expires, if one is running.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            OverlayState::Visible { hide_at } => hide_at,
            OverlayState::Hidden => None,
        }
    }

    /// Shows the overlay and (re)starts the countdown.
    ///
    /// Returns `true` if the overlay was hidden before.
    pub fn show(&mut self, now: Instant) -> bool {
        let was_hidden = !self.is_visible();
        self.state = OverlayState::Visible {
            hide_at: Some(now + self.delay),
        };
        was_hidden
    }

    /// Hides the overlay and drops any countdown.
    ///
    /// Returns `true` if the overlay was visible before.
    pub fn hide(&mut self) -> bool {
        let was_visible = self.is_visible();
        self.state = OverlayState::Hidden;
        was_visible
    }

    /// Flips visibility; returns the new visibility.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_visible() {
            self.hide();
            false
        } else {
            self.show(now);
            true
        }
    }

    /// Arms the countdown if the overlay is visible and none is running.
    pub fn arm(&mut self, now: Instant) {
        if let OverlayState::Visible { hide_at: None } = self.state {
            self.state = OverlayState::Visible {
                hide_at: Some(now + self.delay),
            };
        }
    }

    /// Restarts the countdown on user interaction. No effect while hidden.
    pub fn touch(&mut self, now: Instant) {
        if self.is_visible() {
            self.state = OverlayState::Visible {
                hide_at: Some(now + self.delay),
            };
        }
    }

    /// Keeps the overlay up with no countdown, e.g. while a slider is held.
    pub fn hold(&mut self) {
        if self.is_visible() {
            self.state = OverlayState::Visible { hide_at: None };
        }
    }

    /// Drops the countdown without changing visibility.
    pub fn cancel(&mut self) {
        if let OverlayState::Visible { .. } = self.state {
            self.state = OverlayState::Visible { hide_at: None };
        }
    }

    /// Hides the overlay if the countdown has expired.
    ///
    /// Returns `true` exactly once per expiry.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            OverlayState::Visible { hide_at: Some(at) } if now >= at => {
                self.state = OverlayState::Hidden;
                true
            }
            _ => false,
        }
    }
}
