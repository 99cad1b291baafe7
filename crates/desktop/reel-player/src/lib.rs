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

//! Reel Player - video player widget for gpui
//!
//! The crate splits into a UI-agnostic core and one gpui view:
//! - [`state`]: view-state plus the slider, auto-hide, tap and animation
//!   state machines, all driven by explicit `Instant`s
//! - [`PlayerController`]: facade that forwards playback intent to a
//!   [`VideoSurface`] and mirrors its status events
//! - [`VideoPlayer`]: the gpui view rendering the overlay and routing gestures
//!
//! Decoding and drawing frames belong to the host's [`VideoSurface`].

pub mod config;

pub use config::{DisabledControls, PlayerConfig};

pub mod err;

pub use err::{Error, Result};

pub mod events;

pub use events::PlayerEvent;

pub mod surface;

pub use surface::{
    LoadError, NullSurface, PlaybackDirectives, PlaybackEvent, ResizeMode, SourceDescriptor,
    VideoSurface,
};

pub mod state;

pub mod controller;

pub use controller::{OverlayFrame, PlayerController};

pub mod util;

pub mod video_player;

pub use video_player::VideoPlayer;
