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

//! SliderTrack - horizontal track with a fill and a draggable handle.
//!
//! Layout:
//! ```text
//! ━━━━━━━━━━━━━━━━━●──────────────
//! ```
//!
//! The track only reports: its measured width through `on_measure`, and the
//! pointer x at which a drag started through `on_grab`. The owner tracks the
//! rest of the gesture at window level.

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, MouseButton, MouseDownEvent, ParentElement,
    Pixels, RenderOnce, Rgba, Styled, Window, div, prelude::FluentBuilder, px,
};

use crate::components::theme::ThemeExt;

const TRACK_HEIGHT: f32 = 2.0;
const HANDLE_SIZE: f32 = 12.0;

/// Which theme colors the track uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackKind {
    #[default]
    Seek,
    Volume,
}

#[derive(IntoElement)]
pub struct SliderTrack {
    id:         ElementId,
    kind:       TrackKind,
    /// Handle position in pixels from the left edge
    position:   f32,
    /// Fixed width; `None` fills the remaining row
    width:      Option<f32>,
    fill_color: Option<Rgba>,
    on_measure: Option<Box<dyn Fn(f32, &mut Window, &mut App) + 'static>>,
    on_grab:    Option<Box<dyn Fn(Pixels, &mut Window, &mut App) + 'static>>,
}

impl SliderTrack {
    pub fn new(id: impl Into<ElementId>, kind: TrackKind) -> Self {
        Self {
            id: id.into(),
            kind,
            position: 0.0,
            width: None,
            fill_color: None,
            on_measure: None,
            on_grab: None,
        }
    }

    pub fn position(mut self, position: f32) -> Self {
        self.position = if position.is_finite() { position.max(0.0) } else { 0.0 };
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Overrides the theme's fill and handle color.
    pub fn fill_color(mut self, color: Option<Rgba>) -> Self {
        self.fill_color = color;
        self
    }

    /// Called on every prepaint with the laid-out track width in pixels.
    pub fn on_measure(mut self, handler: impl Fn(f32, &mut Window, &mut App) + 'static) -> Self {
        self.on_measure = Some(Box::new(handler));
        self
    }

    /// Called with the window x of a left press on the track.
    pub fn on_grab(mut self, handler: impl Fn(Pixels, &mut Window, &mut App) + 'static) -> Self {
        self.on_grab = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for SliderTrack {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let (track, fill, handle) = match self.kind {
            TrackKind::Seek => (theme.seek_track, theme.seek_fill, theme.seek_handle),
            TrackKind::Volume => (theme.volume_track, theme.volume_fill, theme.volume_handle),
        };
        let fill = self.fill_color.unwrap_or(fill);
        let handle = self.fill_color.unwrap_or(handle);
        let position = px(self.position);

        div()
            .relative()
            .h(px(28.0))
            .flex()
            .items_center()
            .map(|el| match self.width {
                Some(width) => el.w(px(width)).flex_none(),
                None => el.flex_1(),
            })
            .when_some(self.on_measure, |el, handler| {
                el.on_children_prepainted(move |bounds, window, cx| {
                    if let Some(track) = bounds.first() {
                        handler(track.size.width / px(1.0), window, cx);
                    }
                })
            })
            .child(
                div()
                    .w_full()
                    .h(px(TRACK_HEIGHT))
                    .bg(track)
                    .child(div().h_full().w(position).bg(fill)),
            )
            .child(
                div()
                    .absolute()
                    .left(position - px(HANDLE_SIZE / 2.0))
                    .size(px(HANDLE_SIZE))
                    .rounded_full()
                    .bg(handle),
            )
            .when_some(self.on_grab, |el, handler| {
                el.cursor_pointer().on_mouse_down(
                    MouseButton::Left,
                    move |event: &MouseDownEvent, window, cx| {
                        cx.stop_propagation();
                        handler(event.position.x, window, cx);
                    },
                )
            })
            .id(self.id)
    }
}
