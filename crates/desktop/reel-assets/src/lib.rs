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

use anyhow::Context as _;
use gpui::{AssetSource, Result, SharedString};
use rust_embed::RustEmbed;

/// Icon asset paths for use with `gpui::svg().path()`.
pub mod icons {
    // Transport
    pub const MEDIA_PLAY: &str = "icons/media-play.svg";
    pub const MEDIA_PAUSE: &str = "icons/media-pause.svg";

    pub const VOLUME: &str = "icons/volume.svg";
    pub const VOLUME_MUTED: &str = "icons/volume-muted.svg";

    pub const FULLSCREEN: &str = "icons/fullscreen.svg";
    pub const FULLSCREEN_EXIT: &str = "icons/fullscreen-exit.svg";

    pub const BACK: &str = "icons/back.svg";

    // Status
    pub const LOADER: &str = "icons/loader.svg";
    pub const ERROR: &str = "icons/error.svg";
}

#[derive(RustEmbed)]
#[folder = "../assets"]
#[include = "icons/**/*"]
#[exclude = "*.DS_Store"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<std::borrow::Cow<'static, [u8]>>> {
        Self::get(path)
            .map(|f| Some(f.data))
            .with_context(|| format!("loading asset at path {path:?}"))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter(|p| p.starts_with(path))
            .map(SharedString::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_is_embedded() {
        for path in [
            icons::MEDIA_PLAY,
            icons::MEDIA_PAUSE,
            icons::VOLUME,
            icons::VOLUME_MUTED,
            icons::FULLSCREEN,
            icons::FULLSCREEN_EXIT,
            icons::BACK,
            icons::LOADER,
            icons::ERROR,
        ] {
            assert!(Assets::get(path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn test_list_filters_by_prefix() {
        let listed = Assets.list("icons/media").unwrap();
        assert_eq!(listed.len(), 2);
        assert!(Assets.load("icons/nope.svg").is_err());
    }
}
