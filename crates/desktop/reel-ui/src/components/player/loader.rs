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
    App, IntoElement, ParentElement, RenderOnce, Styled, Transformation, Window, div, percentage,
    px, svg,
};

use crate::components::theme::ThemeExt;

/// Spinner centered over the video while the surface loads.
#[derive(IntoElement)]
pub struct Loader {
    /// Rotation in turns
    angle: f32,
    size:  f32,
}

impl Loader {
    pub fn new(angle: f32) -> Self { Self { angle, size: 48.0 } }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for Loader {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .absolute()
            .inset_0()
            .flex()
            .items_center()
            .justify_center()
            .child(
                svg()
                    .path(reel_assets::icons::LOADER)
                    .size(px(self.size))
                    .text_color(theme.loader)
                    .with_transformation(Transformation::rotate(percentage(self.angle))),
            )
    }
}
