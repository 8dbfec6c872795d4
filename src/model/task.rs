use serde::{Deserialize, Serialize};
use crate::model::locale::{Locale, Tone};

/// 后端处理任务 (只读)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_id: String,
    #[serde(default, deserialize_with = "crate::model::optional_time")]
    pub create_time: Option<String>,
    #[serde(default, deserialize_with = "crate::model::optional_time")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "crate::model::optional_time")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn new(task_id: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            task_id: task_id.into(),
            create_time: None,
            start_time: None,
            end_time: None,
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    AwaitingParse,
    Parsing,
    AwaitingDetection,
    Detecting,
    DetectionComplete,
    Error,
    Unknown(i64),
}

impl From<i64> for TaskStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => TaskStatus::NotStarted,
            1 => TaskStatus::AwaitingParse,
            2 => TaskStatus::Parsing,
            3 => TaskStatus::AwaitingDetection,
            4 => TaskStatus::Detecting,
            5 => TaskStatus::DetectionComplete,
            100 => TaskStatus::Error,
            other => TaskStatus::Unknown(other),
        }
    }
}

impl From<TaskStatus> for i64 {
    fn from(status: TaskStatus) -> Self {
        status.code()
    }
}

impl TaskStatus {
    pub fn code(self) -> i64 {
        match self {
            TaskStatus::NotStarted => 0,
            TaskStatus::AwaitingParse => 1,
            TaskStatus::Parsing => 2,
            TaskStatus::AwaitingDetection => 3,
            TaskStatus::Detecting => 4,
            TaskStatus::DetectionComplete => 5,
            TaskStatus::Error => 100,
            TaskStatus::Unknown(code) => code,
        }
    }

    /// Stages 1..=4: the backend is still working on the task.
    pub fn is_in_progress(self) -> bool {
        matches!(self.code(), 1..=4)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, TaskStatus::DetectionComplete | TaskStatus::Error)
    }

    /// Forward-only progression through 0..=5; `Error` is reachable from any
    /// in-progress stage and absorbs everything after it.
    pub fn can_advance_to(self, next: TaskStatus) -> bool {
        match (self, next) {
            (TaskStatus::Error, _) | (TaskStatus::Unknown(_), _) | (_, TaskStatus::Unknown(_)) => false,
            (from, TaskStatus::Error) => from.is_in_progress(),
            (from, to) => to.code() > from.code(),
        }
    }

    pub fn label(self, locale: Locale) -> String {
        let (en, zh) = match self {
            TaskStatus::NotStarted => ("Not started", "未开始"),
            TaskStatus::AwaitingParse => ("Awaiting parse", "待解析"),
            TaskStatus::Parsing => ("Parsing", "解析中"),
            TaskStatus::AwaitingDetection => ("Awaiting detection", "待检测"),
            TaskStatus::Detecting => ("Detecting", "检测中"),
            TaskStatus::DetectionComplete => ("Detection complete", "检测完成"),
            TaskStatus::Error => ("Error", "错误"),
            TaskStatus::Unknown(code) => return format!("#{}", code),
        };
        match locale {
            Locale::En => en.to_string(),
            Locale::Zh => zh.to_string(),
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            TaskStatus::NotStarted | TaskStatus::Unknown(_) => Tone::Default,
            TaskStatus::DetectionComplete => Tone::Success,
            TaskStatus::Error => Tone::Error,
            _ => Tone::Processing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_absorbing() {
        assert!(TaskStatus::Parsing.can_advance_to(TaskStatus::Error));
        assert!(!TaskStatus::NotStarted.can_advance_to(TaskStatus::Error));
        assert!(!TaskStatus::Error.can_advance_to(TaskStatus::DetectionComplete));
        assert!(!TaskStatus::Detecting.can_advance_to(TaskStatus::Parsing));
        assert!(TaskStatus::AwaitingParse.can_advance_to(TaskStatus::Parsing));
    }
}
