// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;

use crate::{
    models::{ColorScheme, ColorSchemeSetting, ThemePalette},
    ui,
};

pub fn connect(view_handle: &ui::MainWindow, setting: ColorSchemeSetting) {
    let theme = view_handle.global::<ui::Theme>();

    theme.set_light_colors(map_palette(ThemePalette::for_scheme(ColorScheme::Light)));
    theme.set_dark_colors(map_palette(ThemePalette::for_scheme(ColorScheme::Dark)));

    let fixed = setting.fixed();
    theme.set_follow_system(fixed.is_none());
    theme.set_dark_override(fixed == Some(ColorScheme::Dark));

    let detected = theme.get_system_dark().then_some(ColorScheme::Dark);
    log::info!("color scheme setting: {setting}, rendering {}", setting.resolve(detected));
}

fn map_palette(palette: ThemePalette) -> ui::ThemeColors {
    ui::ThemeColors {
        text: palette.text,
        background: palette.background,
        tint: palette.tint,
        icon: palette.icon,
        tab_icon_default: palette.tab_icon_default,
        tab_icon_selected: palette.tab_icon_selected,
        surface: palette.surface,
        border: palette.border,
        input_bar: palette.input_bar,
        tab_bar: palette.tab_bar,
        accent: palette.accent,
    }
}
