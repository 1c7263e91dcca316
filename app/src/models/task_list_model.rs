// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use slint::{Model, ModelNotify, ModelTracker};

use super::{TaskCounts, TaskId, TaskListStore, TaskRow};

/// Row model over a shared [`TaskListStore`].
///
/// All mutations go through here so views get exactly one notification per
/// accepted change. The store borrow is always released before notifying.
#[derive(Clone)]
pub struct TaskListModel {
    store: Rc<RefCell<TaskListStore>>,
    notify: Rc<ModelNotify>,
}

impl TaskListModel {
    pub fn new(store: TaskListStore) -> Self {
        Self { store: Rc::new(RefCell::new(store)), notify: Rc::new(Default::default()) }
    }

    pub fn add_task(&self, text: &str) -> Option<TaskId> {
        let id = self.store.borrow_mut().add_task(text)?;

        self.notify.row_added(self.row_count() - 1, 1);
        Some(id)
    }

    pub fn toggle_complete(&self, index: usize) -> bool {
        if !self.store.borrow_mut().toggle_complete(index) {
            return false;
        }

        self.notify.row_changed(index);
        true
    }

    pub fn counts(&self) -> TaskCounts {
        self.store.borrow().counts()
    }
}

impl Model for TaskListModel {
    type Data = TaskRow;

    fn row_count(&self) -> usize {
        self.store.borrow().total_count()
    }

    fn row_data(&self, row: usize) -> Option<Self::Data> {
        self.store.borrow().row(row)
    }

    fn model_tracker(&self) -> &dyn ModelTracker {
        self.notify.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model() -> TaskListModel {
        let mut store = TaskListStore::new();
        store.add_task("Item 1");
        store.add_task("Item 2");
        store.toggle_complete(0);
        TaskListModel::new(store)
    }

    #[test]
    fn test_rows() {
        let model = test_model();

        assert_eq!(model.row_count(), 2);
        assert!(model.row_data(0).unwrap().completed);
        assert_eq!(model.row_data(1).unwrap().text, "Item 2");
        assert_eq!(model.row_data(2), None);
    }

    #[test]
    fn test_add_task() {
        let model = test_model();

        let id = model.add_task("Item 3").unwrap();

        assert_eq!(model.row_count(), 3);
        assert_eq!(
            model.row_data(2),
            Some(TaskRow { id, text: "Item 3".into(), completed: false })
        );
        assert_eq!(model.add_task(" "), None);
        assert_eq!(model.row_count(), 3);
    }

    #[test]
    fn test_toggle_complete() {
        let model = test_model();

        assert!(model.toggle_complete(1));
        assert!(model.row_data(1).unwrap().completed);
        assert_eq!(model.counts(), TaskCounts { total: 2, remaining: 0 });

        assert!(!model.toggle_complete(2));
        assert_eq!(model.counts(), TaskCounts { total: 2, remaining: 0 });
    }

    #[test]
    fn test_clones_share_store() {
        let model = test_model();
        let other = model.clone();

        other.add_task("Item 3");

        assert_eq!(model.row_count(), 3);
    }
}
