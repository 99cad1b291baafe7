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

//! Pixel/value mapping for the seek and volume tracks.
//!
//! A track is a horizontal bar `track_width` pixels wide. The handle sits at
//! a pixel position in `[0, track_width]`; the mapping functions translate
//! that position to a playback time or a volume level and back.

use std::time::Duration;

/// Clamps a pixel position onto a track of the given width.
///
/// Non-finite positions and degenerate tracks collapse to `0`.
pub fn clamp_to_track(position: f32, track_width: f32) -> f32 {
    if !position.is_finite() || track_width <= 0.0 || position <= 0.0 {
        return 0.0;
    }
    position.min(track_width)
}

/// Maps a playback time onto the seek track.
///
/// Returns `0` while the duration is unknown (zero).
pub fn time_to_position(current_time: Duration, duration: Duration, track_width: f32) -> f32 {
    if duration.is_zero() || track_width <= 0.0 {
        return 0.0;
    }
    let fraction = current_time.as_secs_f64() / duration.as_secs_f64();
    clamp_to_track((f64::from(track_width) * fraction) as f32, track_width)
}

/// Maps a seek-track position back to a playback time.
pub fn position_to_time(position: f32, duration: Duration, track_width: f32) -> Duration {
    if track_width <= 0.0 || duration.is_zero() {
        return Duration::ZERO;
    }
    let fraction = f64::from(clamp_to_track(position, track_width)) / f64::from(track_width);
    duration.mul_f64(fraction)
}

/// Maps a volume level in `[0, 1]` onto the volume track.
pub fn volume_to_position(volume: f32, track_width: f32) -> f32 {
    if !volume.is_finite() {
        return 0.0;
    }
    clamp_to_track(track_width * volume.clamp(0.0, 1.0), track_width)
}

/// Maps a volume-track position back to a volume level in `[0, 1]`.
pub fn position_to_volume(position: f32, track_width: f32) -> f32 {
    if track_width <= 0.0 {
        return 0.0;
    }
    (clamp_to_track(position, track_width) / track_width).clamp(0.0, 1.0)
}

/// Handle position of a single track plus the drag bookkeeping around it.
///
/// While a drag is active the handle follows `offset + dx` only; external
/// position updates (playback progress) are ignored until the drag ends.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Slider {
    track_width: f32,
    position:    f32,
    offset:      f32,
    dragging:    bool,
}

impl Slider {
    pub fn new(track_width: f32) -> Self {
        Self {
            track_width: track_width.max(0.0),
            ..Self::default()
        }
    }

    pub fn track_width(&self) -> f32 { self.track_width }

    /// Current handle position; also the width of the filled part.
    pub fn position(&self) -> f32 { self.position }

    /// Position the current drag started from.
    pub fn offset(&self) -> f32 { self.offset }

    pub fn is_dragging(&self) -> bool { self.dragging }

    /// Filled fraction of the track in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.track_width <= 0.0 {
            0.0
        } else {
            self.position / self.track_width
        }
    }

    /// Updates the measured track width, re-clamping the handle.
    pub fn set_track_width(&mut self, track_width: f32) {
        self.track_width = if track_width.is_finite() {
            track_width.max(0.0)
        } else {
            0.0
        };
        self.position = clamp_to_track(self.position, self.track_width);
        self.offset = clamp_to_track(self.offset, self.track_width);
    }

    /// Moves the handle from outside the gesture, e.g. on playback progress.
    ///
    /// Ignored while dragging.
    pub fn sync_position(&mut self, position: f32) {
        if self.dragging {
            return;
        }
        self.position = clamp_to_track(position, self.track_width);
        self.offset = self.position;
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
        self.offset = self.position;
    }

    /// Applies the gesture's accumulated horizontal delta and returns the new
    /// handle position.
    pub fn drag_by(&mut self, dx: f32) -> f32 {
        let dx = if dx.is_finite() { dx } else { 0.0 };
        self.position = clamp_to_track(self.offset + dx, self.track_width);
        self.position
    }

    /// Ends the drag and returns the position the handle was released at.
    pub fn end_drag(&mut self) -> f32 {
        self.dragging = false;
        self.offset = self.position;
        self.position
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(-10.0, 0.0 ; "negative clamps to start")]
    #[test_case(0.0, 0.0 ; "start stays")]
    #[test_case(75.5, 75.5 ; "inside stays")]
    #[test_case(200.0, 200.0 ; "end stays")]
    #[test_case(512.0, 200.0 ; "past end clamps to width")]
    #[test_case(f32::NAN, 0.0 ; "nan collapses to start")]
    #[test_case(f32::INFINITY, 0.0 ; "infinity collapses to start")]
    fn test_clamp_to_track(position: f32, expected: f32) {
        assert!((clamp_to_track(position, 200.0) - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn test_clamp_is_bounded_and_idempotent() {
        let width = 173.0;
        let mut p = -400.0_f32;
        while p < 600.0 {
            let once = clamp_to_track(p, width);
            assert!((0.0..=width).contains(&once), "{p} -> {once}");
            assert!((clamp_to_track(once, width) - once).abs() < f32::EPSILON);
            p += 3.7;
        }
    }

    #[test]
    fn test_seek_fill_position() {
        let pos = time_to_position(Duration::from_secs(25), Duration::from_secs(100), 200.0);
        assert!((pos - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_duration_holds_position_at_start() {
        assert_eq!(time_to_position(Duration::from_secs(3), Duration::ZERO, 200.0), 0.0);
        assert_eq!(position_to_time(120.0, Duration::ZERO, 200.0), Duration::ZERO);
    }

    #[test]
    fn test_zero_width_track() {
        assert_eq!(time_to_position(Duration::from_secs(3), Duration::from_secs(9), 0.0), 0.0);
        assert_eq!(position_to_time(5.0, Duration::from_secs(9), 0.0), Duration::ZERO);
        assert_eq!(position_to_volume(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_time_round_trip() {
        let duration = Duration::from_secs_f64(187.25);
        let width = 311.0;
        let mut t = 0.0_f64;
        while t <= duration.as_secs_f64() {
            let time = Duration::from_secs_f64(t);
            let back = position_to_time(time_to_position(time, duration, width), duration, width);
            assert!(
                (back.as_secs_f64() - t).abs() < 1e-3,
                "round trip drifted: {t} -> {back:?}"
            );
            t += 0.75;
        }
    }

    #[test]
    fn test_volume_round_trip() {
        for step in 0..=100 {
            let volume = step as f32 / 100.0;
            let back = position_to_volume(volume_to_position(volume, 150.0), 150.0);
            assert!((back - volume).abs() < 1e-5, "{volume} -> {back}");
        }
    }

    #[test]
    fn test_drag_follows_offset_plus_delta() {
        let mut slider = Slider::new(200.0);
        slider.sync_position(50.0);
        slider.begin_drag();
        assert!((slider.drag_by(30.0) - 80.0).abs() < f32::EPSILON);
        assert!((slider.drag_by(-80.0) - 0.0).abs() < f32::EPSILON);
        assert!((slider.drag_by(400.0) - 200.0).abs() < f32::EPSILON);
        assert!((slider.end_drag() - 200.0).abs() < f32::EPSILON);
        assert!((slider.offset() - 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_progress_ignored_while_dragging() {
        let mut slider = Slider::new(100.0);
        slider.sync_position(10.0);
        slider.begin_drag();
        slider.drag_by(40.0);
        slider.sync_position(90.0);
        assert!((slider.position() - 50.0).abs() < f32::EPSILON);

        slider.end_drag();
        slider.sync_position(90.0);
        assert!((slider.position() - 90.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_shrinking_track_reclamps() {
        let mut slider = Slider::new(300.0);
        slider.sync_position(250.0);
        slider.set_track_width(120.0);
        assert!((slider.position() - 120.0).abs() < f32::EPSILON);
        assert!((slider.fraction() - 1.0).abs() < f32::EPSILON);
    }
}
