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

use crate::surface::LoadError;

/// Notifications a host can subscribe to on the player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    LoadStart,
    Load { duration: Duration },
    Progress { current_time: Duration },
    Error(LoadError),
    /// Playback reached the end, or the seek handle was released there.
    End,
    Play,
    Pause,
    EnterFullscreen,
    ExitFullscreen,
    ShowControls,
    HideControls,
    Back,
}
