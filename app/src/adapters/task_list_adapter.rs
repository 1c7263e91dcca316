// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::rc::Rc;

use crate::{
    controllers::TaskListController,
    models::{TaskCounts, TaskRow},
    ui,
};

// one place to implement connection between adapter (view) and controller
pub fn connect(view_handle: &ui::MainWindow, controller: TaskListController) {
    let adapter = view_handle.global::<ui::TaskListAdapter>();

    adapter.set_tasks(Rc::new(MapModel::new(controller.tasks(), map_task_to_item)).into());
    set_counts(&adapter, controller.counts());

    controller.on_counts_changed({
        let view_handle = view_handle.as_weak();

        move |counts| {
            if let Some(view_handle) = view_handle.upgrade() {
                set_counts(&view_handle.global::<ui::TaskListAdapter>(), counts);
            }
        }
    });

    adapter.on_toggle_task(move |index| {
        // negative rows cannot exist, drop them like any other out-of-range row
        if let Ok(index) = usize::try_from(index) {
            controller.toggle_complete(index);
        }
    });
}

fn set_counts(adapter: &ui::TaskListAdapter, counts: TaskCounts) {
    adapter.set_total_count(to_int(counts.total));
    adapter.set_remaining_count(to_int(counts.remaining));
}

fn to_int(count: usize) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

// maps a TaskRow (data) to a TaskItem (ui)
fn map_task_to_item(row: TaskRow) -> ui::TaskItem {
    ui::TaskItem { text: row.text.into(), completed: row.completed }
}
