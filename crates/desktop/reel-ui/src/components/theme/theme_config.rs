/// Theme configuration for the video player overlay.
///
/// The overlay sits on top of arbitrary video, so every color here is
/// chosen to read against both dark and bright frames.

use gpui::Rgba;

use crate::styles::color::{rgba_from_hex, rgba_from_hex_alpha};

/// Colors used by the player overlay components.
#[derive(Debug, Clone)]
pub struct ThemeConfig {
    /// Backdrop behind the top and bottom control bars
    pub overlay_scrim: Rgba,
    /// Backdrop behind the error notice
    pub error_scrim:   Rgba,

    /// Icons, title and timer text
    pub text_primary:   Rgba,
    /// Secondary labels
    pub text_secondary: Rgba,

    /// Control button background on hover
    pub control_hover: Rgba,

    /// Seek bar unfilled part
    pub seek_track:  Rgba,
    /// Seek bar filled part; `PlayerConfig::seek_color` overrides it
    pub seek_fill:   Rgba,
    pub seek_handle: Rgba,

    pub volume_track:  Rgba,
    pub volume_fill:   Rgba,
    pub volume_handle: Rgba,

    pub loader: Rgba,
}

impl ThemeConfig {
    /// White chrome over a translucent black scrim.
    pub fn dark() -> Self {
        Self {
            overlay_scrim: rgba_from_hex_alpha(0x000000, 0.5),
            error_scrim:   rgba_from_hex_alpha(0x000000, 0.5),

            text_primary:   rgba_from_hex(0xffffff),
            text_secondary: rgba_from_hex(0xbbbbbb),

            control_hover: rgba_from_hex_alpha(0xffffff, 0.12),

            seek_track:  rgba_from_hex_alpha(0xffffff, 0.5),
            seek_fill:   rgba_from_hex(0xffffff),
            seek_handle: rgba_from_hex(0xffffff),

            volume_track:  rgba_from_hex(0x333333),
            volume_fill:   rgba_from_hex(0xffffff),
            volume_handle: rgba_from_hex(0xffffff),

            loader: rgba_from_hex(0xffffff),
        }
    }

    /// Opaque bars and a saturated accent for busy footage.
    pub fn high_contrast() -> Self {
        Self {
            overlay_scrim: rgba_from_hex_alpha(0x000000, 0.85),
            error_scrim:   rgba_from_hex(0x000000),

            text_primary:   rgba_from_hex(0xffffff),
            text_secondary: rgba_from_hex(0xffffff),

            control_hover: rgba_from_hex_alpha(0xffd400, 0.3),

            seek_track:  rgba_from_hex(0x555555),
            seek_fill:   rgba_from_hex(0xffd400),
            seek_handle: rgba_from_hex(0xffffff),

            volume_track:  rgba_from_hex(0x555555),
            volume_fill:   rgba_from_hex(0xffd400),
            volume_handle: rgba_from_hex(0xffffff),

            loader: rgba_from_hex(0xffd400),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self { Self::dark() }
}
