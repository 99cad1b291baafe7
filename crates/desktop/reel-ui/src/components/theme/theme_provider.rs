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

//! Global theme access for the overlay components:
//! ```ignore
//! let theme = cx.theme();
//! ```

use gpui::{App, Global};

use super::theme_config::ThemeConfig;

/// Holds the active [`ThemeConfig`] as a gpui global.
pub struct ThemeProvider {
    theme: ThemeConfig,
}

impl Global for ThemeProvider {}

impl ThemeProvider {
    pub fn new(theme: ThemeConfig) -> Self { Self { theme } }

    pub fn theme(&self) -> &ThemeConfig { &self.theme }

    pub fn set_theme(&mut self, theme: ThemeConfig) { self.theme = theme; }

    /// Installs the default theme. Call once during startup.
    pub fn init(cx: &mut App) { cx.set_global(Self::new(ThemeConfig::default())); }

    pub fn init_with_theme(cx: &mut App, theme: ThemeConfig) { cx.set_global(Self::new(theme)); }
}

/// Theme lookup from any gpui context.
pub trait ThemeExt {
    fn theme(&self) -> &ThemeConfig;
}

impl ThemeExt for App {
    fn theme(&self) -> &ThemeConfig { self.global::<ThemeProvider>().theme() }
}
