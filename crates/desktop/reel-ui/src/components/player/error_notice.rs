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

use gpui::{
    App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div, px, svg,
};

use crate::components::theme::ThemeExt;

/// Replaces the whole overlay once playback failed.
#[derive(IntoElement)]
pub struct ErrorNotice {
    message: SharedString,
}

impl ErrorNotice {
    pub const DEFAULT_MESSAGE: &'static str = "Video unavailable";

    pub fn new() -> Self {
        Self {
            message: Self::DEFAULT_MESSAGE.into(),
        }
    }

    pub fn message(mut self, message: impl Into<SharedString>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for ErrorNotice {
    fn default() -> Self { Self::new() }
}

impl RenderOnce for ErrorNotice {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .absolute()
            .inset_0()
            .bg(theme.error_scrim)
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(px(16.0))
            .child(
                svg()
                    .path(reel_assets::icons::ERROR)
                    .size(px(36.0))
                    .text_color(theme.text_primary),
            )
            .child(
                div()
                    .text_size(px(16.0))
                    .text_color(theme.text_primary)
                    .child(self.message),
            )
    }
}
