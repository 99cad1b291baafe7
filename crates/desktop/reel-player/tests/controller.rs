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

use std::time::{Duration, Instant};

use reel_player::{
    Error, LoadError, PlaybackDirectives, PlaybackEvent, PlayerConfig, PlayerController,
    PlayerEvent, ResizeMode, SourceDescriptor, VideoSurface,
};

#[derive(Debug, Default)]
struct RecordingSurface {
    applied: Vec<PlaybackDirectives>,
    seeks:   Vec<(Duration, Duration)>,
}

impl RecordingSurface {
    fn last(&self) -> &PlaybackDirectives { self.applied.last().unwrap() }
}

impl VideoSurface for RecordingSurface {
    fn apply(&mut self, directives: &PlaybackDirectives) { self.applied.push(directives.clone()); }

    fn seek(&mut self, time: Duration, tolerance: Duration) { self.seeks.push((time, tolerance)); }
}

fn secs(s: u64) -> Duration { Duration::from_secs(s) }

fn millis(ms: u64) -> Duration { Duration::from_millis(ms) }

fn controller(config: &PlayerConfig) -> PlayerController<RecordingSurface> {
    reel_common_telemetry::init_default_ut_logging();
    PlayerController::new(config, RecordingSurface::default()).unwrap()
}

/// A controller whose video has loaded `duration` at `now`, with a measured
/// seek track.
fn loaded(
    config: &PlayerConfig,
    duration: Duration,
    track_width: f32,
    now: Instant,
) -> PlayerController<RecordingSurface> {
    let mut player = controller(config);
    player.set_seek_track_width(track_width);
    player.handle_event(PlaybackEvent::LoadStart, now);
    player.handle_event(PlaybackEvent::Load { duration }, now);
    player.drain_events();
    player
}

#[test]
fn test_mount_pushes_initial_directives() {
    let config = PlayerConfig::builder()
        .paused(true)
        .volume(0.5)
        .resize_mode(ResizeMode::Cover)
        .source(SourceDescriptor::new("file:///clip.mp4"))
        .build();
    let player = controller(&config);

    assert_eq!(player.surface().applied.len(), 1);
    let directives = player.surface().last();
    assert!(directives.paused);
    assert!((directives.volume - 0.5).abs() < f32::EPSILON);
    assert_eq!(directives.source, Some(SourceDescriptor::new("file:///clip.mp4")));
    assert!(player.state().fullscreen);
}

#[test]
fn test_invalid_config_is_rejected() {
    reel_common_telemetry::init_default_ut_logging();
    let config = PlayerConfig::builder().volume(2.0).build();
    let result = PlayerController::new(&config, RecordingSurface::default());
    assert!(matches!(result, Err(Error::InvalidConfig { .. })));
}

#[test]
fn test_progress_moves_seek_fill() {
    let t0 = Instant::now();
    let mut player = loaded(&PlayerConfig::default(), secs(100), 200.0, t0);

    player.handle_event(PlaybackEvent::Progress { current_time: secs(25) }, t0);
    assert!((player.state().seeker.position() - 50.0).abs() < f32::EPSILON);
    assert_eq!(player.drain_events(), vec![PlayerEvent::Progress {
        current_time: secs(25),
    }]);
}

#[test]
fn test_progress_does_not_move_held_handle() {
    let t0 = Instant::now();
    let mut player = loaded(&PlayerConfig::default(), secs(100), 200.0, t0);
    player.begin_seek_drag();
    player.seek_drag(20.0);

    player.handle_event(PlaybackEvent::Progress { current_time: secs(80) }, t0);
    assert!((player.state().seeker.position() - 20.0).abs() < f32::EPSILON);
    assert_eq!(player.state().current_time, secs(80));
}

#[test]
fn test_load_error_replaces_overlay() {
    let t0 = Instant::now();
    let mut player = controller(&PlayerConfig::default());
    player.handle_event(PlaybackEvent::LoadStart, t0);
    assert!(player.overlay(t0).spinner_angle.is_some());

    let error = LoadError {
        code:    -1100,
        domain:  "NSURLErrorDomain".into(),
        message: "file not found".into(),
    };
    player.handle_event(PlaybackEvent::Error(error.clone()), t0);

    assert!(!player.state().loading);
    assert_eq!(player.state().error, Some(error.clone()));
    let frame = player.overlay(t0);
    assert!(frame.error);
    assert!(frame.spinner_angle.is_none());
    assert!(frame.controls_opacity.abs() < f32::EPSILON);
    assert_eq!(player.drain_events(), vec![
        PlayerEvent::LoadStart,
        PlayerEvent::Error(error)
    ]);
}

#[test]
fn test_set_source_clears_error() {
    let t0 = Instant::now();
    let mut player = controller(&PlayerConfig::default());
    player.handle_event(PlaybackEvent::Error(LoadError::default()), t0);
    assert!(player.overlay(t0).error);

    player.set_source(SourceDescriptor::new("file:///other.mp4"));
    assert!(!player.state().has_error());
    assert!(!player.overlay(t0).error);
    assert_eq!(
        player.surface().last().source,
        Some(SourceDescriptor::new("file:///other.mp4"))
    );
}

#[test]
fn test_spinner_runs_only_while_loading() {
    let t0 = Instant::now();
    let mut player = controller(&PlayerConfig::default());
    assert!(!player.is_animating(t0));

    player.handle_event(PlaybackEvent::LoadStart, t0);
    assert!(player.is_animating(t0 + millis(100)));

    player.handle_event(PlaybackEvent::Load { duration: secs(10) }, t0 + secs(1));
    assert!(!player.is_animating(t0 + secs(1)));
    assert!(player.overlay(t0 + secs(1)).spinner_angle.is_none());
}

#[test]
fn test_volume_drag_to_zero_mutes() {
    let t0 = Instant::now();
    let mut player = controller(&PlayerConfig::default());
    assert!((player.state().volume_slider.position() - 150.0).abs() < f32::EPSILON);

    player.begin_volume_drag();
    player.volume_drag(-200.0);
    assert!(player.state().volume.abs() < f32::EPSILON);
    assert!(player.state().muted);
    assert!(player.surface().last().muted);

    player.volume_drag(-75.0);
    assert!((player.state().volume - 0.5).abs() < f32::EPSILON);
    assert!(!player.state().muted);
    player.end_volume_drag(t0);
    assert!(!player.state().volume_slider.is_dragging());
}

#[test]
fn test_seek_release_at_end_pauses_and_ends() {
    let t0 = Instant::now();
    let mut player = loaded(&PlayerConfig::default(), secs(100), 200.0, t0);
    assert!(!player.state().paused);

    player.begin_seek_drag();
    player.seek_drag(250.0);
    player.end_seek_drag(t0 + secs(1));

    assert!(player.state().paused);
    assert!(!player.state().seeking);
    assert_eq!(player.state().current_time, secs(100));
    assert!(player.surface().last().paused);
    assert!(player.surface().seeks.is_empty());
    assert_eq!(player.drain_events(), vec![PlayerEvent::End]);
}

#[test]
fn test_seek_release_mid_track_seeks() {
    let t0 = Instant::now();
    let config = PlayerConfig::builder().seek_tolerance(millis(100)).build();
    let mut player = loaded(&config, secs(100), 200.0, t0);

    player.begin_seek_drag();
    assert_eq!(player.next_deadline(), None);
    player.seek_drag(100.0);
    player.end_seek_drag(t0 + secs(1));

    assert_eq!(player.surface().seeks, vec![(secs(50), millis(100))]);
    assert_eq!(player.state().current_time, secs(50));
    assert_eq!(player.next_deadline(), Some(t0 + secs(1) + secs(15)));
}

#[test]
fn test_scrubbing_seeks_at_most_once_per_step() {
    let t0 = Instant::now();
    let config = PlayerConfig::builder().scrubbing(secs(5)).build();
    // Half a second per pixel.
    let mut player = loaded(&config, secs(128), 256.0, t0);

    player.begin_seek_drag();
    player.seek_drag(4.0);
    player.seek_drag(10.0);
    player.seek_drag(12.0);
    player.seek_drag(20.0);

    assert_eq!(player.surface().seeks, vec![(secs(5), secs(5)), (secs(10), secs(5))]);
}

#[test]
fn test_without_scrubbing_drag_does_not_seek() {
    let t0 = Instant::now();
    let mut player = loaded(&PlayerConfig::default(), secs(128), 256.0, t0);
    player.begin_seek_drag();
    player.seek_drag(100.0);
    assert!(player.surface().seeks.is_empty());
}

#[test]
fn test_double_tap_toggles_fullscreen() {
    let t0 = Instant::now();
    let mut player = controller(&PlayerConfig::default());

    player.on_screen_tap(t0);
    player.on_screen_tap(t0 + millis(100));

    assert!(player.state().fullscreen);
    assert_eq!(player.state().resize_mode, ResizeMode::Cover);
    assert_eq!(player.surface().last().resize_mode, ResizeMode::Cover);
    assert_eq!(player.drain_events(), vec![PlayerEvent::EnterFullscreen]);

    // The first tap of the pair never resolves as a single tap.
    player.tick(t0 + secs(1));
    assert!(player.state().show_controls());
    assert!(player.drain_events().is_empty());
}

#[test]
fn test_fullscreen_keeps_resize_mode_when_not_toggling() {
    let config = PlayerConfig::builder()
        .toggle_resize_mode_on_fullscreen(false)
        .build();
    let mut player = controller(&config);
    player.toggle_fullscreen();
    assert!(player.state().fullscreen);
    assert_eq!(player.state().resize_mode, ResizeMode::Contain);
    player.toggle_fullscreen();
    assert_eq!(player.drain_events(), vec![
        PlayerEvent::EnterFullscreen,
        PlayerEvent::ExitFullscreen
    ]);
}

#[test]
fn test_single_tap_waits_for_double_tap_window() {
    let t0 = Instant::now();
    let mut player = controller(&PlayerConfig::default());

    player.on_screen_tap(t0);
    assert_eq!(player.next_deadline(), Some(t0 + millis(300)));
    player.tick(t0 + millis(299));
    assert!(player.state().show_controls());

    player.tick(t0 + millis(300));
    assert!(!player.state().show_controls());
    assert_eq!(player.drain_events(), vec![PlayerEvent::HideControls]);
}

#[test]
fn test_tap_anywhere_to_pause() {
    let t0 = Instant::now();
    let config = PlayerConfig::builder().tap_anywhere_to_pause(true).build();
    let mut player = loaded(&config, secs(60), 200.0, t0);

    player.on_screen_tap(t0 + secs(1));
    player.tick(t0 + secs(1) + millis(300));

    assert!(player.state().paused);
    assert!(player.state().show_controls());
    assert_eq!(player.drain_events(), vec![PlayerEvent::Pause]);
}

#[test]
fn test_controls_hide_once_after_timeout() {
    let t0 = Instant::now();
    let mut player = loaded(&PlayerConfig::default(), secs(60), 200.0, t0);
    assert_eq!(player.next_deadline(), Some(t0 + secs(15)));

    player.tick(t0 + secs(14));
    assert!(player.drain_events().is_empty());

    player.tick(t0 + secs(15));
    assert_eq!(player.drain_events(), vec![PlayerEvent::HideControls]);
    assert!(player.is_animating(t0 + secs(15) + millis(250)));
    assert!(player.overlay(t0 + secs(16)).controls_opacity.abs() < f32::EPSILON);

    player.tick(t0 + secs(30));
    assert!(player.drain_events().is_empty());
    assert_eq!(player.next_deadline(), None);
}

#[test]
fn test_single_tap_before_timeout_restarts_countdown() {
    let t0 = Instant::now();
    let mut player = loaded(&PlayerConfig::default(), secs(60), 200.0, t0);

    player.on_screen_tap(t0 + millis(14_900));
    assert_eq!(player.next_deadline(), Some(t0 + millis(15_200)));

    // The countdown armed at load must not fire underneath the pending tap.
    player.tick(t0 + secs(15));
    assert!(player.state().show_controls());
    assert!(player.drain_events().is_empty());

    player.tick(t0 + millis(15_200));
    assert!(!player.state().show_controls());
    assert_eq!(player.drain_events(), vec![PlayerEvent::HideControls]);
    assert_eq!(player.next_deadline(), None);
}

#[test]
fn test_double_tap_before_timeout_restarts_countdown() {
    let t0 = Instant::now();
    let mut player = loaded(&PlayerConfig::default(), secs(60), 200.0, t0);

    player.on_screen_tap(t0 + millis(14_800));
    player.on_screen_tap(t0 + millis(14_900));
    assert!(player.state().fullscreen);
    assert_eq!(player.next_deadline(), Some(t0 + millis(29_900)));

    player.tick(t0 + secs(15));
    assert!(player.state().show_controls());
    assert_eq!(player.drain_events(), vec![PlayerEvent::EnterFullscreen]);

    player.tick(t0 + millis(29_900));
    assert_eq!(player.drain_events(), vec![PlayerEvent::HideControls]);
}

#[test]
fn test_unmount_drops_deadlines_and_animations() {
    let t0 = Instant::now();
    let mut player = loaded(&PlayerConfig::default(), secs(60), 200.0, t0);
    player.hide_controls(t0 + secs(1));
    player.show_controls(t0 + millis(1_100));
    player.on_screen_tap(t0 + millis(1_200));
    player.handle_event(PlaybackEvent::LoadStart, t0 + millis(1_200));
    player.drain_events();

    let now = t0 + millis(1_300);
    assert!(player.next_deadline().is_some());
    assert!(player.is_animating(now));

    player.unmount();

    assert_eq!(player.next_deadline(), None);
    assert!(!player.is_animating(now));
    player.tick(t0 + secs(600));
    assert!(player.drain_events().is_empty());
    assert!(player.state().show_controls());
}

#[test]
fn test_set_rate_rejects_non_positive() {
    let mut player = controller(&PlayerConfig::default());
    assert!(matches!(player.set_rate(0.0), Err(Error::InvalidConfig { .. })));
    assert!(matches!(player.set_rate(f32::NAN), Err(Error::InvalidConfig { .. })));

    player.set_rate(1.5).unwrap();
    assert!((player.surface().last().rate - 1.5).abs() < f32::EPSILON);
}

#[test]
fn test_play_pause_emit_only_on_change() {
    let mut player = controller(&PlayerConfig::default());
    player.play();
    assert!(player.drain_events().is_empty());
    player.toggle_play_pause();
    player.pause();
    assert_eq!(player.drain_events(), vec![PlayerEvent::Pause]);
}

#[test]
fn test_seek_is_clamped_to_duration() {
    let t0 = Instant::now();
    let mut player = loaded(&PlayerConfig::default(), secs(30), 200.0, t0);
    player.seek(secs(45));
    assert_eq!(player.surface().seeks, vec![(secs(30), Duration::ZERO)]);
    assert_eq!(player.timer_text(), "-00:00");
}
