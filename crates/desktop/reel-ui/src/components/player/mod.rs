/// Overlay components for the video player.
///
/// - `ControlButton`: icon button for play/pause, mute, fullscreen and back
/// - `SliderTrack`: seek or volume track with a draggable handle
/// - `TimerLabel`: clickable elapsed/remaining time
/// - `Loader`: rotating spinner shown while loading
/// - `ErrorNotice`: full-size "Video unavailable" message

mod control_button;
mod error_notice;
mod loader;
mod slider_track;
mod timer_label;

pub use control_button::ControlButton;
pub use error_notice::ErrorNotice;
pub use loader::Loader;
pub use slider_track::{SliderTrack, TrackKind};
pub use timer_label::TimerLabel;
