use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::model::{Flow, Task};

pub mod http;
pub mod memory;
pub mod redis_provider;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned HTTP {0}")]
    Status(u16),
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// 分页参数，`current` 从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current: 1, page_size: 20 }
    }
}

impl Pagination {
    pub fn new(current: usize, page_size: usize) -> Self {
        Self { current: current.max(1), page_size: page_size.max(1) }
    }

    /// Rows per page; a deserialized `page_size` of 0 still yields one row.
    pub fn limit(&self) -> usize {
        self.page_size.max(1)
    }

    /// Zero-based index of the first row on this page.
    pub fn offset(&self) -> usize {
        (self.current.max(1) - 1).saturating_mul(self.limit())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskPage {
    pub data: Vec<Task>,
    pub success: bool,
    pub total: usize,
}

impl TaskPage {
    pub fn failed() -> Self {
        Self { data: Vec::new(), success: false, total: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowPage {
    pub data: Vec<Flow>,
    pub success: bool,
}

#[async_trait]
pub trait TaskListProvider: Send + Sync {
    async fn query(&self, pagination: Pagination) -> Result<TaskPage, ProviderError>;
}

/// Unknown task ids yield an empty, successful page.
#[async_trait]
pub trait FlowListProvider: Send + Sync {
    async fn query(&self, task_id: &str) -> Result<FlowPage, ProviderError>;
}
