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

//! Player facade.
//!
//! [`PlayerController`] owns the view-state and the overlay state machines,
//! forwards playback intent to a [`VideoSurface`] and mirrors the surface's
//! status events back. It is UI-agnostic: the gpui view feeds it gestures
//! and `Instant`s, then renders from [`PlayerController::state`] and
//! [`PlayerController::overlay`].

use std::time::{Duration, Instant};

use snafu::ensure;
use tracing::{debug, info, warn};

use crate::{
    config::{DisabledControls, PlayerConfig},
    err::{InvalidConfigSnafu, Result},
    events::PlayerEvent,
    state::{ControlFade, PlayerViewState, Spinner, TapAction, TapDetector, slider},
    surface::{PlaybackEvent, ResizeMode, SourceDescriptor, VideoSurface},
};

/// What the overlay shows at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    /// Opacity of the control chrome; `0` means nothing is rendered.
    pub controls_opacity: f32,
    /// Loader rotation in turns, while loading.
    pub spinner_angle:    Option<f32>,
    /// The "Video unavailable" notice replaces everything else.
    pub error:            bool,
}

pub struct PlayerController<S: VideoSurface> {
    surface: S,
    state:   PlayerViewState,

    taps:    TapDetector,
    fade:    ControlFade,
    spinner: Spinner,

    scrubbing:      Option<Duration>,
    seek_tolerance: Duration,

    toggle_resize_mode_on_fullscreen: bool,
    tap_anywhere_to_pause:            bool,
    disabled:                         DisabledControls,
    seek_color:                       Option<String>,

    events: Vec<PlayerEvent>,
}

impl<S: VideoSurface> PlayerController<S> {
    /// Validates `config`, builds the initial view-state and pushes it to the
    /// surface.
    pub fn new(config: &PlayerConfig, surface: S) -> Result<Self> {
        config.validate()?;
        let state = PlayerViewState::from_config(config);
        let fade = ControlFade::new(config.control_animation_timing, state.show_controls());
        let mut controller = Self {
            surface,
            state,
            taps: TapDetector::new(config.double_tap_time),
            fade,
            spinner: Spinner::default(),
            scrubbing: config.scrubbing.filter(|step| !step.is_zero()),
            seek_tolerance: config.seek_tolerance,
            toggle_resize_mode_on_fullscreen: config.toggle_resize_mode_on_fullscreen,
            tap_anywhere_to_pause: config.tap_anywhere_to_pause,
            disabled: config.disabled,
            seek_color: config.seek_color.clone(),
            events: Vec::new(),
        };
        controller.push_directives();
        Ok(controller)
    }

    pub fn state(&self) -> &PlayerViewState { &self.state }

    pub fn surface(&self) -> &S { &self.surface }

    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }

    pub fn disabled(&self) -> DisabledControls { self.disabled }

    pub fn seek_color(&self) -> Option<&str> { self.seek_color.as_deref() }

    /// Takes the notifications raised since the last call.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> { std::mem::take(&mut self.events) }

    fn emit(&mut self, event: PlayerEvent) { self.events.push(event); }

    fn push_directives(&mut self) {
        let directives = self.state.directives();
        self.surface.apply(&directives);
    }

    // Playback

    pub fn play(&mut self) {
        if !self.state.paused {
            return;
        }
        debug!("play");
        self.state.paused = false;
        self.push_directives();
        self.emit(PlayerEvent::Play);
    }

    pub fn pause(&mut self) {
        if self.state.paused {
            return;
        }
        debug!("pause");
        self.state.paused = true;
        self.push_directives();
        self.emit(PlayerEvent::Pause);
    }

    pub fn toggle_play_pause(&mut self) {
        if self.state.paused {
            self.play();
        } else {
            self.pause();
        }
    }

    /// Seeks to `time`, clamped to the known duration. The local time moves
    /// right away; the surface catches up through progress events.
    pub fn seek(&mut self, time: Duration) {
        let time = time.min(self.state.duration);
        debug!(?time, "seek");
        self.state.current_time = time;
        self.state.sync_seeker();
        self.surface.seek(time, self.seek_tolerance);
    }

    /// Sets the volume, clamped to `[0, 1]`. Zero mutes; anything above
    /// unmutes. Non-finite levels are ignored.
    pub fn set_volume(&mut self, volume: f32) {
        if !volume.is_finite() {
            return;
        }
        self.apply_volume(volume.clamp(0.0, 1.0));
        self.state.sync_volume_slider();
        self.push_directives();
    }

    fn apply_volume(&mut self, volume: f32) {
        self.state.volume = volume;
        self.state.muted = volume <= 0.0;
    }

    pub fn toggle_mute(&mut self) {
        self.state.muted = !self.state.muted;
        debug!(muted = self.state.muted, "toggle mute");
        self.push_directives();
    }

    pub fn set_rate(&mut self, rate: f32) -> Result<()> {
        ensure!(
            rate.is_finite() && rate > 0.0,
            InvalidConfigSnafu {
                message: format!("rate must be positive, got {rate}"),
            }
        );
        self.state.rate = rate;
        self.push_directives();
        Ok(())
    }

    /// Flips fullscreen, swapping `cover`/`contain` when configured to.
    pub fn toggle_fullscreen(&mut self) {
        self.state.fullscreen = !self.state.fullscreen;
        if self.toggle_resize_mode_on_fullscreen {
            self.state.resize_mode = if self.state.fullscreen {
                ResizeMode::Cover
            } else {
                ResizeMode::Contain
            };
        }
        debug!(fullscreen = self.state.fullscreen, "toggle fullscreen");
        self.push_directives();
        self.emit(if self.state.fullscreen {
            PlayerEvent::EnterFullscreen
        } else {
            PlayerEvent::ExitFullscreen
        });
    }

    /// Switches the timer between elapsed and remaining time.
    pub fn toggle_timer(&mut self) {
        self.state.show_time_remaining = !self.state.show_time_remaining;
    }

    pub fn timer_text(&self) -> String { self.state.timer_text() }

    pub fn back(&mut self) {
        debug!("back");
        self.emit(PlayerEvent::Back);
    }

    /// Replaces the media source. This is the only way out of the error
    /// state.
    pub fn set_source(&mut self, source: SourceDescriptor) {
        info!(uri = %source.uri, "set source");
        self.state.source = Some(source);
        self.state.error = None;
        self.state.current_time = Duration::ZERO;
        self.state.duration = Duration::ZERO;
        self.state.sync_seeker();
        self.push_directives();
    }

    // Overlay visibility

    /// Restarts the auto-hide countdown after a control was used.
    pub fn touch(&mut self, now: Instant) { self.state.controls.touch(now); }

    pub fn show_controls(&mut self, now: Instant) {
        if self.state.controls.show(now) {
            self.fade.fade_to(true, now);
            self.emit(PlayerEvent::ShowControls);
        }
    }

    pub fn hide_controls(&mut self, now: Instant) {
        if self.state.controls.hide() {
            self.fade.fade_to(false, now);
            self.emit(PlayerEvent::HideControls);
        }
    }

    pub fn toggle_controls(&mut self, now: Instant) {
        if self.state.show_controls() {
            self.hide_controls(now);
        } else {
            self.show_controls(now);
        }
    }

    /// A tap on the video outside any control.
    ///
    /// Every tap restarts the auto-hide countdown. Double taps toggle
    /// fullscreen at once. A single tap is applied after the double-tap
    /// window, from [`PlayerController::tick`].
    pub fn on_screen_tap(&mut self, now: Instant) {
        self.touch(now);
        match self.taps.on_tap(now) {
            Some(TapAction::DoubleTap) => {
                debug!("double tap");
                self.toggle_fullscreen();
            }
            Some(TapAction::SingleTap) => self.single_tap(now),
            None => {}
        }
    }

    fn single_tap(&mut self, now: Instant) {
        debug!("single tap");
        if self.tap_anywhere_to_pause {
            self.toggle_play_pause();
            self.touch(now);
        } else {
            self.toggle_controls(now);
        }
    }

    /// Fires every deadline that has passed by `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.taps.poll(now).is_some() {
            self.single_tap(now);
        }
        if self.state.controls.poll(now) {
            debug!("controls timed out");
            self.fade.fade_to(false, now);
            self.emit(PlayerEvent::HideControls);
        }
    }

    /// Earliest instant [`PlayerController::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.taps.deadline(), self.state.controls.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Whether the overlay needs another frame after `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.fade.is_running(now) || (self.state.loading && self.spinner.is_active())
    }

    pub fn overlay(&self, now: Instant) -> OverlayFrame {
        if self.state.has_error() {
            return OverlayFrame {
                controls_opacity: 0.0,
                spinner_angle:    None,
                error:            true,
            };
        }
        OverlayFrame {
            controls_opacity: self.fade.value(now),
            spinner_angle:    self.state.loading.then(|| self.spinner.angle(now)),
            error:            false,
        }
    }

    // Seek bar

    pub fn set_seek_track_width(&mut self, width: f32) {
        self.state.seeker.set_track_width(width);
        self.state.sync_seeker();
    }

    /// Seek handle grabbed: progress stops moving it and the overlay stays up.
    pub fn begin_seek_drag(&mut self) {
        debug!("seek drag start");
        self.state.seeking = true;
        self.state.seeker.begin_drag();
        self.state.controls.hold();
    }

    /// Moves the seek handle by the gesture's total `dx` since the grab.
    ///
    /// With scrubbing on, the surface also seeks whenever the handle time is
    /// at least one step away from the last seek.
    pub fn seek_drag(&mut self, dx: f32) {
        if !self.state.seeking {
            return;
        }
        let position = self.state.seeker.drag_by(dx);
        let Some(step) = self.scrubbing else {
            return;
        };
        if self.state.loading {
            return;
        }
        let time = slider::position_to_time(
            position,
            self.state.duration,
            self.state.seeker.track_width(),
        );
        if time < self.state.duration && time.abs_diff(self.state.current_time) >= step {
            debug!(?time, "scrub");
            self.state.current_time = time;
            self.surface.seek(time, step);
        }
    }

    /// Releases the seek handle. At the end of a loaded video this pauses
    /// and raises `End` instead of seeking.
    pub fn end_seek_drag(&mut self, now: Instant) {
        if !self.state.seeking {
            return;
        }
        let position = self.state.seeker.end_drag();
        self.state.seeking = false;
        let time = slider::position_to_time(
            position,
            self.state.duration,
            self.state.seeker.track_width(),
        );
        debug!(?time, "seek drag end");

        if !self.state.duration.is_zero() && time >= self.state.duration && !self.state.loading {
            self.state.paused = true;
            self.state.current_time = self.state.duration;
            self.push_directives();
            self.emit(PlayerEvent::End);
        } else {
            self.seek(time);
        }
        self.state.controls.touch(now);
    }

    // Volume bar

    pub fn set_volume_track_width(&mut self, width: f32) {
        self.state.volume_slider.set_track_width(width);
        self.state.sync_volume_slider();
    }

    pub fn begin_volume_drag(&mut self) {
        debug!("volume drag start");
        self.state.volume_slider.begin_drag();
        self.state.controls.hold();
    }

    /// Moves the volume handle; the level applies live.
    pub fn volume_drag(&mut self, dx: f32) {
        if !self.state.volume_slider.is_dragging() {
            return;
        }
        let position = self.state.volume_slider.drag_by(dx);
        let volume =
            slider::position_to_volume(position, self.state.volume_slider.track_width());
        self.apply_volume(volume);
        self.push_directives();
    }

    pub fn end_volume_drag(&mut self, now: Instant) {
        if !self.state.volume_slider.is_dragging() {
            return;
        }
        self.state.volume_slider.end_drag();
        debug!(volume = self.state.volume, muted = self.state.muted, "volume drag end");
        self.state.controls.touch(now);
    }

    // Surface status

    /// Mirrors a status event from the surface and re-emits it.
    pub fn handle_event(&mut self, event: PlaybackEvent, now: Instant) {
        match event {
            PlaybackEvent::LoadStart => {
                info!("load start");
                self.state.loading = true;
                self.spinner.start(now);
                self.emit(PlayerEvent::LoadStart);
            }
            PlaybackEvent::Load { duration } => {
                info!(?duration, "loaded");
                self.state.duration = duration;
                self.state.loading = false;
                self.spinner.stop();
                self.state.sync_seeker();
                self.state.controls.arm(now);
                self.emit(PlayerEvent::Load { duration });
            }
            PlaybackEvent::Progress { current_time } => {
                self.state.current_time = current_time;
                if !self.state.seeking {
                    self.state.sync_seeker();
                }
                self.emit(PlayerEvent::Progress { current_time });
            }
            PlaybackEvent::Error(error) => {
                warn!(%error, "playback failed");
                self.state.loading = false;
                self.spinner.stop();
                self.state.error = Some(error.clone());
                self.emit(PlayerEvent::Error(error));
            }
            PlaybackEvent::End => {
                info!("end");
                self.emit(PlayerEvent::End);
            }
        }
    }

    /// Drops every pending deadline and animation.
    pub fn unmount(&mut self) {
        self.taps.cancel();
        self.state.controls.cancel();
        self.spinner.stop();
        self.fade.settle();
    }
}
