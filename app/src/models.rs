// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod task;
pub use task::{Task, TaskId};

mod task_list_store;
pub use task_list_store::{TaskCounts, TaskListStore, TaskRow};

mod task_list_model;
pub use task_list_model::TaskListModel;

mod theme;
pub use theme::{ColorScheme, ColorSchemeSetting, ThemePalette};
