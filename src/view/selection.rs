use tracing::debug;

/// Emitted whenever the selected task actually changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<String>,
    pub current: Option<String>,
}

/// 单选：任意时刻至多一个选中的任务
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn select(&mut self, task_id: impl Into<String>) -> Option<SelectionChange> {
        let task_id = task_id.into();
        if self.selected.as_deref() == Some(task_id.as_str()) {
            debug!(task_id = %task_id, "Task already selected");
            return None;
        }
        let previous = self.selected.replace(task_id.clone());
        Some(SelectionChange { previous, current: Some(task_id) })
    }

    pub fn clear(&mut self) -> Option<SelectionChange> {
        let previous = self.selected.take()?;
        Some(SelectionChange { previous: Some(previous), current: None })
    }
}
