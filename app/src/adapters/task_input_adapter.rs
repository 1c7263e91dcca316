// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;

use crate::{controllers::TaskListController, ui};

// The pending text stays in the view; it only reaches the controller on submit
// and the view clears it when the submission was accepted.
pub fn connect(view_handle: &ui::MainWindow, controller: TaskListController) {
    view_handle
        .global::<ui::TaskInputAdapter>()
        .on_submit(move |text| controller.add_task(text.as_str()));
}
