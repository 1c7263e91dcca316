// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::models::ColorSchemeSetting;

/// Start-up configuration, resolved once before the window is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub color_scheme: ColorSchemeSetting,
}
