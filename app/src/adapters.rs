// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

pub mod task_input_adapter;
pub mod task_list_adapter;
pub mod theme_adapter;
