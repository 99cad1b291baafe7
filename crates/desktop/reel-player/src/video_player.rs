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

//! VideoPlayer - gpui view hosting the controller and rendering the overlay.

use std::time::{Duration, Instant};

use gpui::{
    AnyView, App, AppContext, ClickEvent, Context, DispatchPhase, Entity, EventEmitter,
    InteractiveElement, IntoElement, MouseButton, MouseMoveEvent, MouseUpEvent, ParentElement,
    Pixels, Render, Rgba, StatefulInteractiveElement, Styled, Task, WeakEntity, Window, div,
    prelude::FluentBuilder, px,
};
use reel_ui::{
    ControlButton, ErrorNotice, Loader, SliderTrack, ThemeExt, TimerLabel, TrackKind,
    styles::parse_hex_color,
};
use tracing::debug;

use crate::{
    PlayerConfig, PlayerEvent, Result,
    controller::{OverlayFrame, PlayerController},
    surface::{PlaybackEvent, SourceDescriptor, VideoSurface},
    util::ResultExt,
};

/// Track width changes smaller than this are layout jitter.
const RESIZE_EPSILON: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTarget {
    Seek,
    Volume,
}

#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    target:   DragTarget,
    origin_x: Pixels,
}

/// Video player widget.
///
/// Renders the host's video view (if any) with the control overlay on top and
/// forwards every interaction to its [`PlayerController`]. Status events from
/// the surface come in through [`VideoPlayer::handle_playback_event`];
/// notifications go out as [`PlayerEvent`]s.
pub struct VideoPlayer {
    weak_self:  WeakEntity<Self>,
    controller: PlayerController<Box<dyn VideoSurface>>,
    video:      Option<AnyView>,
    seek_color: Option<Rgba>,
    drag:       Option<ActiveDrag>,
    /// Single wake-up for the earliest pending deadline; replacing it cancels
    /// the previous one.
    wake:       Option<Task<()>>,
    wake_at:    Option<Instant>,
}

impl EventEmitter<PlayerEvent> for VideoPlayer {}

impl VideoPlayer {
    /// Validates `config`, attaches `surface` and creates the view entity.
    pub fn build(
        config: &PlayerConfig,
        surface: Box<dyn VideoSurface>,
        cx: &mut App,
    ) -> Result<Entity<Self>> {
        let controller = PlayerController::new(config, surface)?;
        Ok(cx.new(|cx| Self::new(controller, cx)))
    }

    pub fn new(controller: PlayerController<Box<dyn VideoSurface>>, cx: &mut Context<Self>) -> Self {
        let seek_color = controller.seek_color().and_then(parse_hex_color);
        if controller.seek_color().is_some() && seek_color.is_none() {
            tracing::warn!(color = ?controller.seek_color(), "ignoring unparsable seek color");
        }
        Self {
            weak_self: cx.weak_entity(),
            controller,
            video: None,
            seek_color,
            drag: None,
            wake: None,
            wake_at: None,
        }
    }

    /// Sets the view rendered underneath the overlay, usually the surface.
    pub fn set_video_view(&mut self, view: AnyView, cx: &mut Context<Self>) {
        self.video = Some(view);
        cx.notify();
    }

    pub fn controller(&self) -> &PlayerController<Box<dyn VideoSurface>> { &self.controller }

    /// Feeds a status event from the surface.
    pub fn handle_playback_event(&mut self, event: PlaybackEvent, cx: &mut Context<Self>) {
        self.controller.handle_event(event, Instant::now());
        self.after_change(cx);
    }

    pub fn play(&mut self, cx: &mut Context<Self>) {
        self.controller.play();
        self.after_change(cx);
    }

    pub fn pause(&mut self, cx: &mut Context<Self>) {
        self.controller.pause();
        self.after_change(cx);
    }

    pub fn toggle_play_pause(&mut self, cx: &mut Context<Self>) {
        self.controller.toggle_play_pause();
        self.after_change(cx);
    }

    pub fn seek(&mut self, time: Duration, cx: &mut Context<Self>) {
        self.controller.seek(time);
        self.after_change(cx);
    }

    pub fn set_volume(&mut self, volume: f32, cx: &mut Context<Self>) {
        self.controller.set_volume(volume);
        self.after_change(cx);
    }

    pub fn toggle_mute(&mut self, cx: &mut Context<Self>) {
        self.controller.toggle_mute();
        self.after_change(cx);
    }

    pub fn set_rate(&mut self, rate: f32, cx: &mut Context<Self>) -> Result<()> {
        self.controller.set_rate(rate)?;
        self.after_change(cx);
        Ok(())
    }

    pub fn toggle_fullscreen(&mut self, cx: &mut Context<Self>) {
        self.controller.toggle_fullscreen();
        self.after_change(cx);
    }

    pub fn set_source(&mut self, source: SourceDescriptor, cx: &mut Context<Self>) {
        self.controller.set_source(source);
        self.after_change(cx);
    }

    /// Publishes pending notifications, re-arms the wake-up and re-renders.
    fn after_change(&mut self, cx: &mut Context<Self>) {
        for event in self.controller.drain_events() {
            cx.emit(event);
        }
        self.schedule_wake(cx);
        cx.notify();
    }

    fn schedule_wake(&mut self, cx: &mut Context<Self>) {
        let deadline = self.controller.next_deadline();
        if deadline == self.wake_at && (deadline.is_none() || self.wake.is_some()) {
            return;
        }
        self.wake_at = deadline;
        self.wake = deadline.map(|at| {
            let delay = at.saturating_duration_since(Instant::now());
            cx.spawn(async move |this, cx| {
                cx.background_executor().timer(delay).await;
                this.update(cx, |view, cx| {
                    view.wake = None;
                    view.wake_at = None;
                    view.controller.tick(Instant::now());
                    view.after_change(cx);
                })
                .log_err();
            })
        });
    }

    /// Runs `f` against this view from a component callback.
    fn with_self(
        weak_self: &WeakEntity<Self>,
        cx: &mut App,
        f: impl FnOnce(&mut Self, Instant, &mut Context<Self>),
    ) {
        if let Some(this) = weak_self.upgrade() {
            this.update(cx, |view, cx| {
                let now = Instant::now();
                f(view, now, cx);
                view.after_change(cx);
            });
        }
    }

    fn begin_drag(&mut self, target: DragTarget, origin_x: Pixels) {
        debug!(?target, "drag grant");
        self.drag = Some(ActiveDrag { target, origin_x });
        match target {
            DragTarget::Seek => self.controller.begin_seek_drag(),
            DragTarget::Volume => self.controller.begin_volume_drag(),
        }
    }

    fn update_drag(&mut self, x: Pixels, cx: &mut Context<Self>) {
        let Some(drag) = self.drag else {
            return;
        };
        let dx = (x - drag.origin_x) / px(1.0);
        match drag.target {
            DragTarget::Seek => self.controller.seek_drag(dx),
            DragTarget::Volume => self.controller.volume_drag(dx),
        }
        self.after_change(cx);
    }

    fn end_drag(&mut self, x: Pixels, cx: &mut Context<Self>) {
        self.update_drag(x, cx);
        let Some(drag) = self.drag.take() else {
            return;
        };
        let now = Instant::now();
        match drag.target {
            DragTarget::Seek => self.controller.end_seek_drag(now),
            DragTarget::Volume => self.controller.end_volume_drag(now),
        }
        self.after_change(cx);
    }

    fn set_seek_track_width(&mut self, width: f32, cx: &mut Context<Self>) {
        let current = self.controller.state().seeker.track_width();
        if (current - width).abs() > RESIZE_EPSILON {
            self.controller.set_seek_track_width(width);
            cx.notify();
        }
    }

    fn register_drag_listeners(&self, window: &mut Window, cx: &mut Context<Self>) {
        let handle = cx.entity();
        window.on_mouse_event(move |event: &MouseMoveEvent, phase, window, cx| {
            if phase != DispatchPhase::Capture {
                return;
            }
            handle.update(cx, |this, cx| this.update_drag(event.position.x, cx));
            window.refresh();
        });

        let handle = cx.entity();
        window.on_mouse_event(move |event: &MouseUpEvent, phase, window, cx| {
            if phase != DispatchPhase::Capture || event.button != MouseButton::Left {
                return;
            }
            handle.update(cx, |this, cx| this.end_drag(event.position.x, cx));
            window.refresh();
        });
    }

    fn render_top_bar(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let theme = cx.theme();
        let state = self.controller.state();
        let disabled = self.controller.disabled();
        let weak_self = self.weak_self.clone();

        let volume_icon = if state.muted || state.volume <= 0.0 {
            reel_assets::icons::VOLUME_MUTED
        } else {
            reel_assets::icons::VOLUME
        };
        let fullscreen_icon = if state.fullscreen {
            reel_assets::icons::FULLSCREEN_EXIT
        } else {
            reel_assets::icons::FULLSCREEN
        };

        div()
            .absolute()
            .top_0()
            .left_0()
            .right_0()
            .h(px(56.0))
            .px(px(12.0))
            .flex()
            .items_center()
            .gap(px(12.0))
            .bg(theme.overlay_scrim)
            .when(!disabled.back, |el| {
                let weak_self = weak_self.clone();
                el.child(ControlButton::new("reel-back", reel_assets::icons::BACK).on_click(
                    move |_window, cx| {
                        Self::with_self(&weak_self, cx, |view, now, _| {
                            view.controller.touch(now);
                            view.controller.back();
                        });
                    },
                ))
            })
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .text_size(px(15.0))
                    .text_color(theme.text_primary)
                    .children(state.title.clone()),
            )
            .when(!disabled.volume, |el| {
                let mute_self = weak_self.clone();
                let grab_self = weak_self.clone();
                el.child(
                    ControlButton::new("reel-mute", volume_icon).size(32.0, 20.0).on_click(
                        move |_window, cx| {
                            Self::with_self(&mute_self, cx, |view, now, _| {
                                view.controller.touch(now);
                                view.controller.toggle_mute();
                            });
                        },
                    ),
                )
                .child(
                    SliderTrack::new("reel-volume", TrackKind::Volume)
                        .width(state.volume_slider.track_width())
                        .position(state.volume_slider.position())
                        .on_grab(move |x, _window, cx| {
                            Self::with_self(&grab_self, cx, |view, _, _| {
                                view.begin_drag(DragTarget::Volume, x);
                            });
                        }),
                )
            })
            .when(!disabled.fullscreen, |el| {
                let weak_self = weak_self.clone();
                el.child(ControlButton::new("reel-fullscreen", fullscreen_icon).on_click(
                    move |_window, cx| {
                        Self::with_self(&weak_self, cx, |view, now, _| {
                            view.controller.touch(now);
                            view.controller.toggle_fullscreen();
                        });
                    },
                ))
            })
    }

    fn render_bottom_bar(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let theme = cx.theme();
        let state = self.controller.state();
        let disabled = self.controller.disabled();
        let weak_self = self.weak_self.clone();
        let handle = cx.entity();

        let play_icon = if state.paused {
            reel_assets::icons::MEDIA_PLAY
        } else {
            reel_assets::icons::MEDIA_PAUSE
        };

        div()
            .absolute()
            .bottom_0()
            .left_0()
            .right_0()
            .px(px(12.0))
            .pb(px(8.0))
            .flex()
            .flex_col()
            .bg(theme.overlay_scrim)
            .when(!disabled.seek_bar, |el| {
                let grab_self = weak_self.clone();
                el.child(
                    div().w_full().flex().child(
                        SliderTrack::new("reel-seek", TrackKind::Seek)
                            .position(state.seeker.position())
                            .fill_color(self.seek_color)
                            .on_measure(move |width, _window, cx| {
                                handle.update(cx, |view, cx| view.set_seek_track_width(width, cx));
                            })
                            .on_grab(move |x, _window, cx| {
                                Self::with_self(&grab_self, cx, |view, _, _| {
                                    view.begin_drag(DragTarget::Seek, x);
                                });
                            }),
                    ),
                )
            })
            .child(
                div()
                    .w_full()
                    .h(px(40.0))
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(div().when(!disabled.play_pause, |el| {
                        let weak_self = weak_self.clone();
                        el.child(
                            ControlButton::new("reel-play-pause", play_icon)
                                .size(40.0, 26.0)
                                .on_click(move |_window, cx| {
                                    Self::with_self(&weak_self, cx, |view, now, _| {
                                        view.controller.touch(now);
                                        view.controller.toggle_play_pause();
                                    });
                                }),
                        )
                    }))
                    .when(!disabled.timer, |el| {
                        let weak_self = weak_self.clone();
                        el.child(TimerLabel::new("reel-timer", state.timer_text()).on_click(
                            move |_window, cx| {
                                Self::with_self(&weak_self, cx, |view, now, _| {
                                    view.controller.touch(now);
                                    view.controller.toggle_timer();
                                });
                            },
                        ))
                    }),
            )
    }
}

impl Render for VideoPlayer {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.drag.is_some() {
            self.register_drag_listeners(window, cx);
        }

        let now = Instant::now();
        let frame: OverlayFrame = self.controller.overlay(now);
        if self.controller.is_animating(now) {
            window.request_animation_frame();
        }

        let controls = (frame.controls_opacity > 0.0).then(|| {
            div()
                .absolute()
                .inset_0()
                .opacity(frame.controls_opacity)
                .child(self.render_top_bar(cx))
                .child(self.render_bottom_bar(cx))
        });

        div()
            .id("reel-video-player")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(gpui::black())
            .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                this.controller.on_screen_tap(Instant::now());
                this.after_change(cx);
            }))
            .when_some(self.video.clone(), |el, video| {
                el.child(div().absolute().inset_0().child(video))
            })
            .when_some(frame.spinner_angle, |el, angle| el.child(Loader::new(angle)))
            .children(controls)
            .when(frame.error, |el| el.child(ErrorNotice::new()))
    }
}

impl Drop for VideoPlayer {
    fn drop(&mut self) {
        self.wake = None;
        self.controller.unmount();
    }
}
