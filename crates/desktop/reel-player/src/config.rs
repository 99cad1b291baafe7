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

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use snafu::ensure;

use crate::{
    err::{InvalidConfigSnafu, Result},
    surface::{ResizeMode, SourceDescriptor},
};

/// Which parts of the control overlay are hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
#[serde(default)]
pub struct DisabledControls {
    #[builder(default)]
    pub seek_bar:   bool,
    #[builder(default)]
    pub volume:     bool,
    #[builder(default)]
    pub timer:      bool,
    #[builder(default)]
    pub fullscreen: bool,
    #[builder(default)]
    pub back:       bool,
    #[builder(default)]
    pub play_pause: bool,
}

/// Player configuration, read once at mount.
#[derive(Debug, Clone, SmartDefault, Serialize, Deserialize, bon::Builder)]
#[serde(default)]
pub struct PlayerConfig {
    /// Start paused
    #[builder(default, getter)]
    pub paused: bool,

    #[builder(default, getter)]
    pub muted: bool,

    /// Initial volume in `[0, 1]`
    #[default = 1.0]
    #[builder(default = 1.0, getter)]
    pub volume: f32,

    /// Playback rate, must be positive
    #[default = 1.0]
    #[builder(default = 1.0, getter)]
    pub rate: f32,

    /// Loop at the end
    #[builder(default, getter)]
    pub repeat: bool,

    /// Shown in the top bar next to the back button
    #[builder(into, getter)]
    pub title: Option<String>,

    #[builder(into, getter)]
    pub source: Option<SourceDescriptor>,

    /// Initial resize mode; `cover` also starts in fullscreen
    #[builder(default, getter)]
    pub resize_mode: ResizeMode,

    /// Swap between `cover` and `contain` when fullscreen toggles
    #[default = true]
    #[builder(default = true, getter)]
    pub toggle_resize_mode_on_fullscreen: bool,

    #[builder(default, getter)]
    pub disabled: DisabledControls,

    /// Seek-bar fill and handle color as `#rrggbb`, overriding the theme
    #[builder(into, getter)]
    pub seek_color: Option<String>,

    /// Inactivity before the overlay hides (default: 15 seconds)
    #[default(_code = "Duration::from_secs(15)")]
    #[builder(default = Duration::from_secs(15), getter)]
    pub control_timeout: Duration,

    /// Overlay fade duration (default: 500 ms)
    #[default(_code = "Duration::from_millis(500)")]
    #[builder(default = Duration::from_millis(500), getter)]
    pub control_animation_timing: Duration,

    /// Two taps closer than this are a double tap (default: 300 ms)
    #[default(_code = "Duration::from_millis(300)")]
    #[builder(default = Duration::from_millis(300), getter)]
    pub double_tap_time: Duration,

    /// Seek live while dragging, at most once per step. `None` seeks on
    /// release only.
    #[builder(getter)]
    pub scrubbing: Option<Duration>,

    /// Tolerance passed along with every seek
    #[builder(default, getter)]
    pub seek_tolerance: Duration,

    #[default = true]
    #[builder(default = true, getter)]
    pub show_on_start: bool,

    /// A deferred single tap toggles play/pause instead of the overlay
    #[builder(default, getter)]
    pub tap_anywhere_to_pause: bool,

    /// Timer counts down the remaining time instead of up
    #[default = true]
    #[builder(default = true, getter)]
    pub show_time_remaining: bool,

    /// Width of the volume track in pixels (default: 150)
    #[default = 150.0]
    #[builder(default = 150.0, getter)]
    pub volume_track_width: f32,
}

impl PlayerConfig {
    /// Rejects values the player cannot start from.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.volume.is_finite() && (0.0..=1.0).contains(&self.volume),
            InvalidConfigSnafu {
                message: format!("volume must be within [0, 1], got {}", self.volume),
            }
        );
        ensure!(
            self.rate.is_finite() && self.rate > 0.0,
            InvalidConfigSnafu {
                message: format!("rate must be positive, got {}", self.rate),
            }
        );
        ensure!(
            self.volume_track_width.is_finite() && self.volume_track_width >= 0.0,
            InvalidConfigSnafu {
                message: format!(
                    "volume track width must be non-negative, got {}",
                    self.volume_track_width
                ),
            }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::err::Error;

    #[test]
    fn test_defaults_match_builder() {
        let built = PlayerConfig::builder().build();
        let default = PlayerConfig::default();

        assert_eq!(built.control_timeout, Duration::from_secs(15));
        assert_eq!(default.control_timeout, built.control_timeout);
        assert_eq!(default.control_animation_timing, Duration::from_millis(500));
        assert_eq!(default.double_tap_time, built.double_tap_time);
        assert!((default.volume_track_width - 150.0).abs() < f32::EPSILON);
        assert!(default.show_on_start && built.show_on_start);
        assert!(default.toggle_resize_mode_on_fullscreen);
        assert_eq!(default.scrubbing, None);
        assert!(default.validate().is_ok());
    }

    #[test_case(1.5, 1.0 ; "volume above one")]
    #[test_case(-0.1, 1.0 ; "negative volume")]
    #[test_case(f32::NAN, 1.0 ; "nan volume")]
    #[test_case(0.5, 0.0 ; "zero rate")]
    #[test_case(0.5, -2.0 ; "negative rate")]
    #[test_case(0.5, f32::INFINITY ; "infinite rate")]
    fn test_validate_rejects(volume: f32, rate: f32) {
        let config = PlayerConfig::builder().volume(volume).rate(rate).build();
        assert!(matches!(config.validate(), Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PlayerConfig =
            serde_json::from_str(r#"{ "muted": true, "resize_mode": "cover" }"#).unwrap();
        assert!(config.muted);
        assert_eq!(config.resize_mode, ResizeMode::Cover);
        assert_eq!(config.double_tap_time, Duration::from_millis(300));
    }
}
