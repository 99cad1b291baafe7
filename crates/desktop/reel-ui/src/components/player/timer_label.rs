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
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};

use crate::components::theme::ThemeExt;

/// Time readout; clicking it switches between elapsed and remaining time.
#[derive(IntoElement)]
pub struct TimerLabel {
    id:       ElementId,
    text:     SharedString,
    on_click: Option<Box<dyn Fn(&mut Window, &mut App) + 'static>>,
}

impl TimerLabel {
    pub fn new(id: impl Into<ElementId>, text: impl Into<SharedString>) -> Self {
        Self {
            id:       id.into(),
            text:     text.into(),
            on_click: None,
        }
    }

    pub fn on_click(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for TimerLabel {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .id(self.id)
            .min_w(px(56.0))
            .px(px(6.0))
            .flex()
            .justify_end()
            .text_size(px(13.0))
            .text_color(theme.text_primary)
            .cursor_pointer()
            .child(self.text)
            .when_some(self.on_click, |el, handler| {
                el.on_click(move |_event, window, cx| {
                    cx.stop_propagation();
                    handler(window, cx);
                })
            })
    }
}
