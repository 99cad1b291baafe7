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

use std::time::Duration;

use super::{slider, ControlVisibility, Slider};
use crate::{
    config::PlayerConfig,
    surface::{LoadError, PlaybackDirectives, ResizeMode, SourceDescriptor},
    util::format_time,
};

/// Everything the player renders from.
///
/// Owned by one player instance. Only the controller mutates it.
#[derive(Debug, Clone)]
pub struct PlayerViewState {
    pub paused: bool,
    pub muted:  bool,
    pub repeat: bool,
    /// In `[0, 1]`
    pub volume: f32,
    pub rate:   f32,

    pub current_time: Duration,
    /// Zero until the surface reports a load.
    pub duration:     Duration,

    pub seeker:        Slider,
    pub volume_slider: Slider,
    /// Set while the seek handle is held.
    pub seeking:       bool,

    pub controls: ControlVisibility,
    pub loading:  bool,
    pub error:    Option<LoadError>,

    pub fullscreen:  bool,
    pub resize_mode: ResizeMode,

    pub show_time_remaining: bool,

    pub title:  Option<String>,
    pub source: Option<SourceDescriptor>,
}

impl PlayerViewState {
    pub fn from_config(config: &PlayerConfig) -> Self {
        let volume = if config.volume.is_finite() {
            config.volume.clamp(0.0, 1.0)
        } else {
            1.0
        };
        let mut volume_slider = Slider::new(config.volume_track_width);
        volume_slider.sync_position(slider::volume_to_position(
            volume,
            volume_slider.track_width(),
        ));

        Self {
            paused: config.paused,
            muted: config.muted,
            repeat: config.repeat,
            volume,
            rate: config.rate,
            current_time: Duration::ZERO,
            duration: Duration::ZERO,
            seeker: Slider::default(),
            volume_slider,
            seeking: false,
            controls: ControlVisibility::new(config.control_timeout, config.show_on_start),
            loading: false,
            error: None,
            fullscreen: config.resize_mode == ResizeMode::Cover,
            resize_mode: config.resize_mode,
            show_time_remaining: config.show_time_remaining,
            title: config.title.clone(),
            source: config.source.clone(),
        }
    }

    pub fn show_controls(&self) -> bool { self.controls.is_visible() }

    pub fn has_error(&self) -> bool { self.error.is_some() }

    pub fn remaining(&self) -> Duration { self.duration.saturating_sub(self.current_time) }

    /// Timer label: elapsed time, or `-` remaining time when counting down.
    pub fn timer_text(&self) -> String {
        if self.show_time_remaining {
            format!("-{}", format_time(self.remaining().min(self.duration)))
        } else {
            format_time(self.current_time.min(self.duration))
        }
    }

    /// Snapshot of what the surface should currently be doing.
    pub fn directives(&self) -> PlaybackDirectives {
        PlaybackDirectives {
            paused:      self.paused,
            muted:       self.muted,
            volume:      self.volume,
            rate:        self.rate,
            repeat:      self.repeat,
            resize_mode: self.resize_mode,
            source:      self.source.clone(),
        }
    }

    /// Re-derives the seek handle from the current time.
    pub(crate) fn sync_seeker(&mut self) {
        let position =
            slider::time_to_position(self.current_time, self.duration, self.seeker.track_width());
        self.seeker.sync_position(position);
    }

    /// Re-derives the volume handle from the current volume.
    pub(crate) fn sync_volume_slider(&mut self) {
        let position = slider::volume_to_position(self.volume, self.volume_slider.track_width());
        self.volume_slider.sync_position(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(current: u64, duration: u64, remaining: bool) -> PlayerViewState {
        let config = PlayerConfig::builder().show_time_remaining(remaining).build();
        let mut state = PlayerViewState::from_config(&config);
        state.current_time = Duration::from_secs(current);
        state.duration = Duration::from_secs(duration);
        state
    }

    #[test]
    fn test_timer_text_modes() {
        assert_eq!(state_at(65, 200, false).timer_text(), "01:05");
        assert_eq!(state_at(65, 200, true).timer_text(), "-02:15");
    }

    #[test]
    fn test_timer_text_clamps_to_duration() {
        assert_eq!(state_at(250, 200, false).timer_text(), "03:20");
        assert_eq!(state_at(250, 200, true).timer_text(), "-00:00");
        assert_eq!(state_at(5, 0, false).timer_text(), "00:00");
    }

    #[test]
    fn test_cover_starts_fullscreen() {
        let config = PlayerConfig::builder().resize_mode(ResizeMode::Cover).build();
        let state = PlayerViewState::from_config(&config);
        assert!(state.fullscreen);
        assert!(!PlayerViewState::from_config(&PlayerConfig::default()).fullscreen);
    }

    #[test]
    fn test_volume_handle_starts_at_configured_level() {
        let config = PlayerConfig::builder().volume(0.5).volume_track_width(150.0).build();
        let state = PlayerViewState::from_config(&config);
        assert!((state.volume_slider.position() - 75.0).abs() < 1e-4);
    }
}
