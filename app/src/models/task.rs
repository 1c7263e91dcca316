// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Identifies a task for the lifetime of its store. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("task #{_0}")]
pub struct TaskId(u64);

impl TaskId {
    pub(super) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    // kept exactly as submitted, surrounding whitespace included
    text: String,
}

impl Task {
    pub(super) fn new(id: TaskId, text: String) -> Self {
        Self { id, text }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TaskId::new(7).to_string(), "task #7");
    }
}
