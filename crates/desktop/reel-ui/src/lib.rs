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

//! Reel UI - presentational components for the video player overlay
//!
//! Everything here is stateless: components take the values to show plus
//! callbacks, and the owning view decides what happens on interaction.

pub mod components;
pub mod styles;

pub use components::{
    player::{ControlButton, ErrorNotice, Loader, SliderTrack, TimerLabel, TrackKind},
    theme::{ThemeConfig, ThemeExt, ThemeProvider},
};
