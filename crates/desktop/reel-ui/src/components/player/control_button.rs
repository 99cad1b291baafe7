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

//! ControlButton - round icon button used throughout the overlay.

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px, svg,
};

use crate::components::theme::ThemeExt;

#[derive(IntoElement)]
pub struct ControlButton {
    id:        ElementId,
    icon:      SharedString,
    size:      f32,
    icon_size: f32,
    on_click:  Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl ControlButton {
    pub fn new(id: impl Into<ElementId>, icon: impl Into<SharedString>) -> Self {
        Self {
            id:        id.into(),
            icon:      icon.into(),
            size:      36.0,
            icon_size: 22.0,
            on_click:  None,
        }
    }

    /// Sets the outer size and the icon size, in pixels.
    pub fn size(mut self, size: f32, icon_size: f32) -> Self {
        self.size = size;
        self.icon_size = icon_size;
        self
    }

    /// The click does not reach the video underneath.
    pub fn on_click(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for ControlButton {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let hover = theme.control_hover;

        div()
            .id(self.id)
            .size(px(self.size))
            .rounded_full()
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer()
            .hover(move |style| style.bg(hover))
            .child(
                svg()
                    .path(self.icon)
                    .size(px(self.icon_size))
                    .text_color(theme.text_primary),
            )
            .when_some(self.on_click, |el, handler| {
                el.on_click(move |_event, window, cx| {
                    cx.stop_propagation();
                    handler(window, cx);
                })
            })
    }
}
