// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::Color;

/// Color scheme requested at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ColorSchemeSetting {
    /// Follow whatever the platform reports.
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorSchemeSetting {
    /// The scheme forced by this setting, `None` when it follows the platform.
    pub fn fixed(self) -> Option<ColorScheme> {
        match self {
            Self::System => None,
            Self::Light => Some(ColorScheme::Light),
            Self::Dark => Some(ColorScheme::Dark),
        }
    }

    /// Light is the fallback when the platform does not report a scheme.
    pub fn resolve(self, detected: Option<ColorScheme>) -> ColorScheme {
        self.fixed().or(detected).unwrap_or(ColorScheme::Light)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemePalette {
    pub text: Color,
    pub background: Color,
    pub tint: Color,
    pub icon: Color,
    pub tab_icon_default: Color,
    pub tab_icon_selected: Color,
    pub surface: Color,
    pub border: Color,
    pub input_bar: Color,
    pub tab_bar: Color,
    pub accent: Color,
}

const ACCENT: (u8, u8, u8) = (0x0a, 0x7e, 0xa4);

fn rgb((red, green, blue): (u8, u8, u8)) -> Color {
    Color::from_rgb_u8(red, green, blue)
}

// alpha as a percentage of full opacity
fn rgba((red, green, blue): (u8, u8, u8), alpha: u8) -> Color {
    Color::from_argb_u8((u16::from(alpha) * 255 / 100) as u8, red, green, blue)
}

impl ThemePalette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                text: rgb((0x11, 0x18, 0x1c)),
                background: rgb((0xff, 0xff, 0xff)),
                tint: rgb(ACCENT),
                icon: rgb((0x68, 0x70, 0x76)),
                tab_icon_default: rgb((0x68, 0x70, 0x76)),
                tab_icon_selected: rgb(ACCENT),
                surface: rgb((0xff, 0xff, 0xff)),
                border: rgb((0xc0, 0xc0, 0xc0)),
                input_bar: rgba((255, 255, 255), 70),
                tab_bar: rgba((255, 255, 255), 90),
                accent: rgb(ACCENT),
            },
            ColorScheme::Dark => Self {
                text: rgb((0xec, 0xed, 0xee)),
                background: rgb((0x15, 0x17, 0x18)),
                tint: rgb((0xff, 0xff, 0xff)),
                icon: rgb((0x9b, 0xa1, 0xa6)),
                tab_icon_default: rgb((0x9b, 0xa1, 0xa6)),
                tab_icon_selected: rgb((0xff, 0xff, 0xff)),
                surface: rgb((0x1e, 0x1f, 0x20)),
                border: rgb((0x2e, 0x2f, 0x30)),
                input_bar: rgba((30, 31, 32), 70),
                tab_bar: rgba((18, 18, 18), 90),
                accent: rgb(ACCENT),
            },
        }
    }
}
