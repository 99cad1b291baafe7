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

//! DemoRoot - window root hosting one `VideoPlayer` over a simulated surface.

use std::time::{Duration, Instant};

use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Task, Window, div, px, rgb,
};
use reel_player::{PlayerEvent, VideoPlayer, util::format_time};
use tracing::info;

use crate::sim_surface::SimulatedPlayback;

/// How often the simulated decoder reports progress.
const TICK: Duration = Duration::from_millis(250);

/// Stand-in for decoded frames: the source and the decoder's clock.
struct Backdrop {
    label:    SharedString,
    position: Duration,
}

impl Render for Backdrop {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(px(6.0))
            .bg(rgb(0x1b2838))
            .text_color(rgb(0x8fa3b8))
            .child(div().text_size(px(18.0)).child(self.label.clone()))
            .child(div().text_size(px(13.0)).child(format_time(self.position)))
    }
}

pub struct DemoRoot {
    player:        Entity<VideoPlayer>,
    backdrop:      Entity<Backdrop>,
    playback:      SimulatedPlayback,
    _ticker:       Task<()>,
    _subscription: Subscription,
}

impl DemoRoot {
    pub fn new(
        player: Entity<VideoPlayer>,
        playback: SimulatedPlayback,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let label: SharedString = player
            .read(cx)
            .controller()
            .state()
            .source
            .as_ref()
            .map_or_else(|| "no source".into(), |s| s.uri.clone().into());
        let backdrop = cx.new(|_cx| Backdrop {
            label,
            position: Duration::ZERO,
        });
        player.update(cx, |player, cx| player.set_video_view(backdrop.clone().into(), cx));

        let subscription = cx.subscribe_in(&player, window, Self::on_player_event);

        let ticker = cx.spawn(async move |this, cx| {
            loop {
                cx.background_executor().timer(TICK).await;
                if this.update(cx, |root, cx| root.step(cx)).is_err() {
                    break;
                }
            }
        });

        Self {
            player,
            backdrop,
            playback,
            _ticker: ticker,
            _subscription: subscription,
        }
    }

    fn step(&mut self, cx: &mut Context<Self>) {
        let events = self.playback.step(Instant::now());
        let position = self.playback.position();
        self.backdrop.update(cx, |backdrop, cx| {
            if backdrop.position != position {
                backdrop.position = position;
                cx.notify();
            }
        });
        if events.is_empty() {
            return;
        }
        self.player.update(cx, |player, cx| {
            for event in events {
                player.handle_playback_event(event, cx);
            }
        });
    }

    fn on_player_event(
        &mut self,
        _player: &Entity<VideoPlayer>,
        event: &PlayerEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        info!(?event, "player event");
        match event {
            PlayerEvent::EnterFullscreen if !window.is_fullscreen() => window.toggle_fullscreen(),
            PlayerEvent::ExitFullscreen if window.is_fullscreen() => window.toggle_fullscreen(),
            PlayerEvent::Back => cx.quit(),
            _ => {}
        }
    }
}

impl Render for DemoRoot {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div().size_full().child(self.player.clone())
    }
}
