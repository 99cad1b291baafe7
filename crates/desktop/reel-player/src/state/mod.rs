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

/// Player state and the time-driven state machines behind the overlay.
///
/// Nothing in here touches gpui; every machine takes `Instant`s explicitly
/// so it can be driven from tests as well as from the view.
mod animation;
pub mod slider;
mod tap;
mod view_state;
mod visibility;

pub use animation::{ControlFade, SPINNER_PERIOD, Spinner};
pub use slider::Slider;
pub use tap::{TapAction, TapDetector};
pub use view_state::PlayerViewState;
pub use visibility::{ControlVisibility, OverlayState};
