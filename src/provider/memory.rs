use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use crate::model::{Flow, Task};
use crate::provider::{FlowListProvider, FlowPage, Pagination, ProviderError, TaskListProvider, TaskPage};

/// Static dataset shape used by YAML fixtures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub flows: Vec<Flow>,
}

pub struct InMemoryProvider {
    tasks: RwLock<Vec<Task>>,
    // Map<TaskID, Vec<Flow>>
    flows: DashMap<String, Vec<Flow>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
            flows: DashMap::new(),
        }
    }

    pub fn from_fixture(fixture: Fixture) -> Self {
        let provider = Self {
            tasks: RwLock::new(fixture.tasks),
            flows: DashMap::new(),
        };
        for flow in fixture.flows {
            provider.flows.entry(flow.task_id.clone()).or_default().push(flow);
        }
        provider
    }

    pub async fn insert_task(&self, task: Task) {
        let mut tasks = self.tasks.write().await;
        match tasks.iter_mut().find(|t| t.task_id == task.task_id) {
            Some(existing) => *existing = task,
            None => tasks.push(task),
        }
    }

    /// Replaces the whole flow set of one task.
    pub fn set_flows(&self, task_id: &str, flows: Vec<Flow>) {
        self.flows.insert(task_id.to_string(), flows);
    }
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskListProvider for InMemoryProvider {
    async fn query(&self, pagination: Pagination) -> Result<TaskPage, ProviderError> {
        let tasks = self.tasks.read().await;
        let data = tasks
            .iter()
            .skip(pagination.offset())
            .take(pagination.limit())
            .cloned()
            .collect();
        Ok(TaskPage { data, success: true, total: tasks.len() })
    }
}

#[async_trait]
impl FlowListProvider for InMemoryProvider {
    async fn query(&self, task_id: &str) -> Result<FlowPage, ProviderError> {
        let data = self.flows.get(task_id).map(|f| f.value().clone()).unwrap_or_default();
        Ok(FlowPage { data, success: true })
    }
}
