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

//! Demo window for the reel video player.
//!
//! Usage: `reel [uri]`. Any uri plays a simulated 95 second clip; one
//! containing `fail` shows the error notice instead.

mod demo_view;
mod helper;
mod sim_surface;

use gpui::{App, AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use reel_player::{PlayerConfig, VideoPlayer};
use reel_ui::ThemeProvider;

use crate::demo_view::DemoRoot;

const DEFAULT_WIDTH: f32 = 960.0;
const DEFAULT_HEIGHT: f32 = 540.0;

fn main() {
    let _guards = match reel_common_telemetry::init_global_logging(
        "reel",
        &helper::logging_options(),
    ) {
        Ok(guards) => guards,
        Err(err) => {
            eprintln!("failed to initialize logging: {err}");
            Vec::new()
        }
    };
    reel_common_telemetry::set_panic_hook();
    tracing::info!(
        "========== starting reel version {} ==========",
        env!("CARGO_PKG_VERSION")
    );

    let config = match helper::player_config(std::env::args().nth(1)) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("invalid player config: {err:#}");
            return;
        }
    };

    Application::new()
        .with_assets(reel_assets::Assets)
        .run(move |cx: &mut App| {
            ThemeProvider::init(cx);
            open_player_window(&config, cx);
        });
}

fn open_player_window(config: &PlayerConfig, cx: &mut App) {
    let (surface, playback) = sim_surface::simulated();
    let player = match VideoPlayer::build(config, Box::new(surface), cx) {
        Ok(player) => player,
        Err(err) => {
            tracing::error!("failed to create player: {err}");
            cx.quit();
            return;
        }
    };

    let title = config.title.clone().unwrap_or_else(|| "Reel".to_string());
    let bounds = Bounds::centered(None, size(px(DEFAULT_WIDTH), px(DEFAULT_HEIGHT)), cx);
    let opened = cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            focus: true,
            titlebar: Some(gpui::TitlebarOptions {
                title: Some(title.into()),
                appears_transparent: false,
                ..Default::default()
            }),
            ..Default::default()
        },
        |window, cx| cx.new(|cx| DemoRoot::new(player, playback, window, cx)),
    );
    if let Err(err) = opened {
        tracing::error!("failed to open window: {err:#}");
        cx.quit();
        return;
    }
    cx.activate(true);
}
