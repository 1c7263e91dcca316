// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use super::{Task, TaskId};

/// Per-row snapshot handed to the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub remaining: usize,
}

/// Ordered task list plus the set of completed tasks.
///
/// Completion is keyed by [`TaskId`], positions are only used at the boundary
/// where the view reports which row was tapped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    completed: HashSet<TaskId>,
    next_id: u64,
}

impl TaskListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` unless it is empty after trimming.
    ///
    /// The stored text is the original, untrimmed value. Returns the id of the new
    /// task, or `None` when the text was rejected.
    pub fn add_task(&mut self, text: impl Into<String>) -> Option<TaskId> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }

        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text));
        Some(id)
    }

    /// Flips the completion state of the task at `index`.
    ///
    /// Returns `false` and leaves the store untouched when `index` is out of range.
    pub fn toggle_complete(&mut self, index: usize) -> bool {
        let Some(id) = self.tasks.get(index).map(Task::id) else {
            return false;
        };

        if !self.completed.remove(&id) {
            self.completed.insert(id);
        }
        true
    }

    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.tasks.get(index).is_some_and(|task| self.completed.contains(&task.id()))
    }

    pub fn row(&self, index: usize) -> Option<TaskRow> {
        self.tasks.get(index).map(|task| self.to_row(task))
    }

    pub fn rows(&self) -> impl Iterator<Item = TaskRow> + '_ {
        self.tasks.iter().map(|task| self.to_row(task))
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.completed_count()
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts { total: self.total_count(), remaining: self.remaining_count() }
    }

    fn to_row(&self, task: &Task) -> TaskRow {
        TaskRow {
            id: task.id(),
            text: task.text().to_owned(),
            completed: self.completed.contains(&task.id()),
        }
    }
}
