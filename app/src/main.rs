// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#![cfg(not(target_arch = "wasm32"))]

use clap::Parser;
use todo_list::{Settings, models::ColorSchemeSetting};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Color scheme to render with: system, light or dark
    #[arg(long, env = "TODO_COLOR_SCHEME", default_value_t = ColorSchemeSetting::System)]
    color_scheme: ColorSchemeSetting,
}

fn main() -> Result<(), slint::PlatformError> {
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let settings = Settings { color_scheme: cli.color_scheme };
    log::info!("starting with {settings:?}");

    todo_list::run(&settings)
}
