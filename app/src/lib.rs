// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod ui {
    slint::include_modules!();
}

mod adapters;
use adapters::*;

mod callback;
pub use callback::*;

pub mod controllers;
pub mod models;

mod settings;
pub use settings::Settings;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    if let Err(e) = run(&Settings::default()) {
        log::error!("Runtime error: {}", e);
    }
}

/// Creates the main window with a fresh, empty task list.
pub fn init(settings: &Settings) -> Result<ui::MainWindow, slint::PlatformError> {
    let view_handle = ui::MainWindow::new()?;

    theme_adapter::connect(&view_handle, settings.color_scheme);

    let task_list_controller = controllers::TaskListController::new(models::TaskListStore::new());
    task_list_adapter::connect(&view_handle, task_list_controller.clone());
    task_input_adapter::connect(&view_handle, task_list_controller);

    Ok(view_handle)
}

pub fn run(settings: &Settings) -> Result<(), slint::PlatformError> {
    use slint::ComponentHandle;

    let main_window = init(settings)?;
    main_window.run()
}
