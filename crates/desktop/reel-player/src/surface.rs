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

//! The native video component the player drives.
//!
//! The player never decodes anything itself. It pushes [`PlaybackDirectives`]
//! into a [`VideoSurface`] and receives [`PlaybackEvent`]s back from the host.

use std::time::Duration;

use derive_more::Display;
use gpui::SharedString;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

/// How video content scales inside its bounding box.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumString,
    strum_macros::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Fit inside, letterboxed.
    #[default]
    Contain,
    /// Fill, cropping overflow.
    Cover,
    Stretch,
    None,
}

/// Where the surface loads media from. Opaque to the player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDescriptor {
    pub uri: String,
}

impl SourceDescriptor {
    pub fn new(uri: impl Into<String>) -> Self { Self { uri: uri.into() } }
}

/// Declarative playback state pushed to the surface after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackDirectives {
    pub paused:      bool,
    pub muted:       bool,
    pub volume:      f32,
    pub rate:        f32,
    pub repeat:      bool,
    pub resize_mode: ResizeMode,
    pub source:      Option<SourceDescriptor>,
}

/// Load or decode failure reported by the surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
#[display("{domain}({code}): {message}")]
pub struct LoadError {
    pub code:    i32,
    pub domain:  SharedString,
    pub message: SharedString,
}

/// Status callbacks raised by the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    LoadStart,
    Load { duration: Duration },
    Progress { current_time: Duration },
    Error(LoadError),
    End,
}

/// Native video collaborator.
pub trait VideoSurface {
    /// Applies the full set of playback directives.
    fn apply(&mut self, directives: &PlaybackDirectives);

    /// Jumps to `time`. A `tolerance` of zero asks for a frame-exact seek.
    fn seek(&mut self, time: Duration, tolerance: Duration);
}

impl<S: VideoSurface + ?Sized> VideoSurface for Box<S> {
    fn apply(&mut self, directives: &PlaybackDirectives) { (**self).apply(directives); }

    fn seek(&mut self, time: Duration, tolerance: Duration) { (**self).seek(time, tolerance); }
}

/// Surface that discards every command. Useful before the host attaches one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl VideoSurface for NullSurface {
    fn apply(&mut self, _directives: &PlaybackDirectives) {}

    fn seek(&mut self, _time: Duration, _tolerance: Duration) {}
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::*;

    #[test_case("contain", ResizeMode::Contain)]
    #[test_case("cover", ResizeMode::Cover)]
    #[test_case("stretch", ResizeMode::Stretch)]
    #[test_case("none", ResizeMode::None)]
    fn test_resize_mode_names(name: &str, mode: ResizeMode) {
        assert_eq!(ResizeMode::from_str(name).ok(), Some(mode));
        assert_eq!(mode.to_string(), name);
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError {
            code:    -1008,
            domain:  "NSURLErrorDomain".into(),
            message: "resource unavailable".into(),
        };
        assert_eq!(err.to_string(), "NSURLErrorDomain(-1008): resource unavailable");
    }
}
