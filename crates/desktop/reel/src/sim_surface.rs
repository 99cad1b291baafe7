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

//! A fake video surface for the demo.
//!
//! [`SimulatedSurface`] receives the player's directives; [`SimulatedPlayback`]
//! advances a clock from them and produces the status events a real decoder
//! would. Sources whose uri contains `fail` report a load error.

use std::{
    cell::RefCell,
    rc::Rc,
    time::{Duration, Instant},
};

use reel_player::{LoadError, PlaybackDirectives, PlaybackEvent, SourceDescriptor, VideoSurface};

/// Time between `LoadStart` and `Load`.
pub const LOAD_DELAY: Duration = Duration::from_millis(1200);

/// Length of every simulated video.
pub const SIM_DURATION: Duration = Duration::from_secs(95);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Pending,
    Loading { since: Instant },
    Ready,
    Ended,
    Failed,
}

#[derive(Debug)]
struct SimState {
    phase:      Phase,
    directives: Option<PlaybackDirectives>,
    position:   Duration,
}

impl SimState {
    fn source(&self) -> Option<&SourceDescriptor> {
        self.directives.as_ref().and_then(|d| d.source.as_ref())
    }
}

/// The `VideoSurface` half handed to the player.
#[derive(Debug, Clone)]
pub struct SimulatedSurface {
    shared: Rc<RefCell<SimState>>,
}

/// The driver half kept by the host.
#[derive(Debug)]
pub struct SimulatedPlayback {
    shared:    Rc<RefCell<SimState>>,
    last_step: Option<Instant>,
}

/// Creates a connected surface/driver pair.
pub fn simulated() -> (SimulatedSurface, SimulatedPlayback) {
    let shared = Rc::new(RefCell::new(SimState {
        phase:      Phase::Idle,
        directives: None,
        position:   Duration::ZERO,
    }));
    (
        SimulatedSurface {
            shared: shared.clone(),
        },
        SimulatedPlayback {
            shared,
            last_step: None,
        },
    )
}

impl VideoSurface for SimulatedSurface {
    fn apply(&mut self, directives: &PlaybackDirectives) {
        let mut state = self.shared.borrow_mut();
        if state.source() != directives.source.as_ref() {
            tracing::debug!(source = ?directives.source, "simulated surface: new source");
            state.phase = if directives.source.is_some() {
                Phase::Pending
            } else {
                Phase::Idle
            };
            state.position = Duration::ZERO;
        }
        state.directives = Some(directives.clone());
    }

    fn seek(&mut self, time: Duration, _tolerance: Duration) {
        let mut state = self.shared.borrow_mut();
        state.position = time.min(SIM_DURATION);
        if state.phase == Phase::Ended && state.position < SIM_DURATION {
            state.phase = Phase::Ready;
        }
    }
}

impl SimulatedPlayback {
    /// Current simulated playback position.
    pub fn position(&self) -> Duration { self.shared.borrow().position }

    /// Advances the simulation to `now` and returns the events it produced.
    pub fn step(&mut self, now: Instant) -> Vec<PlaybackEvent> {
        let elapsed = self
            .last_step
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_step = Some(now);

        let mut state = self.shared.borrow_mut();
        let mut events = Vec::new();
        match state.phase {
            Phase::Idle | Phase::Ended | Phase::Failed => {}
            Phase::Pending => {
                state.phase = Phase::Loading { since: now };
                events.push(PlaybackEvent::LoadStart);
            }
            Phase::Loading { since } => {
                if now.saturating_duration_since(since) < LOAD_DELAY {
                    return events;
                }
                if state.source().is_some_and(|s| s.uri.contains("fail")) {
                    state.phase = Phase::Failed;
                    events.push(PlaybackEvent::Error(LoadError {
                        code:    -1,
                        domain:  "sim".into(),
                        message: "source could not be decoded".into(),
                    }));
                } else {
                    state.phase = Phase::Ready;
                    events.push(PlaybackEvent::Load {
                        duration: SIM_DURATION,
                    });
                }
            }
            Phase::Ready => {
                let Some(directives) = state.directives.clone() else {
                    return events;
                };
                if directives.paused {
                    return events;
                }
                let advanced = elapsed.mul_f32(directives.rate.max(0.0));
                let next = state.position + advanced;
                if next < SIM_DURATION {
                    state.position = next;
                    events.push(PlaybackEvent::Progress {
                        current_time: next,
                    });
                } else if directives.repeat {
                    state.position = Duration::ZERO;
                    events.push(PlaybackEvent::Progress {
                        current_time: Duration::ZERO,
                    });
                } else {
                    state.position = SIM_DURATION;
                    state.phase = Phase::Ended;
                    events.push(PlaybackEvent::Progress {
                        current_time: SIM_DURATION,
                    });
                    events.push(PlaybackEvent::End);
                }
            }
        }
        events
    }
}
