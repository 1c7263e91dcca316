// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use slint::ModelRc;

use crate::Callback;
use crate::models::{TaskCounts, TaskListModel, TaskListStore, TaskRow};

/// Entry point for the user intents of the todo screen.
#[derive(Clone)]
pub struct TaskListController {
    model: TaskListModel,
    counts_changed: Rc<Callback<TaskCounts>>,
}

impl TaskListController {
    pub fn new(store: TaskListStore) -> Self {
        Self { model: TaskListModel::new(store), counts_changed: Rc::new(Callback::default()) }
    }

    pub fn tasks(&self) -> ModelRc<TaskRow> {
        ModelRc::new(self.model.clone())
    }

    pub fn counts(&self) -> TaskCounts {
        self.model.counts()
    }

    /// Returns `false` when `text` is blank, in which case nothing changes.
    pub fn add_task(&self, text: &str) -> bool {
        let Some(id) = self.model.add_task(text) else {
            return false;
        };

        let counts = self.counts();
        log::debug!("added {id}, {} total, {} remaining", counts.total, counts.remaining);
        self.counts_changed.invoke(&counts);
        true
    }

    pub fn toggle_complete(&self, index: usize) {
        if !self.model.toggle_complete(index) {
            return;
        }

        let counts = self.counts();
        log::debug!("toggled row {index}, {} remaining", counts.remaining);
        self.counts_changed.invoke(&counts);
    }

    pub fn on_counts_changed(&self, callback: impl Fn(TaskCounts) + 'static) {
        self.counts_changed.on(move |counts| callback(*counts));
    }
}
