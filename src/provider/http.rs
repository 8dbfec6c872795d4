use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use crate::model::{Flow, Task};
use crate::provider::{FlowListProvider, FlowPage, Pagination, ProviderError, TaskListProvider, TaskPage};

/// Response wrapper used by the review backend: `{ data, success, total }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
    #[serde(default)]
    success: bool,
    #[serde(default)]
    total: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
    task_path: String,
    flow_path: String,
}

impl HttpProvider {
    pub fn new(base_url: &str, task_path: &str, flow_path: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            task_path: task_path.to_string(),
            flow_path: flow_path.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn fetch<T>(&self, path: &str, query: &[(&str, String)]) -> Result<Envelope<T>, ProviderError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.url(path);
        debug!(url = %url, "Requesting");
        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl TaskListProvider for HttpProvider {
    async fn query(&self, pagination: Pagination) -> Result<TaskPage, ProviderError> {
        let envelope: Envelope<Task> = self
            .fetch(
                &self.task_path,
                &[
                    ("current", pagination.current.max(1).to_string()),
                    ("pageSize", pagination.limit().to_string()),
                ],
            )
            .await?;
        let total = envelope.total.unwrap_or(envelope.data.len());
        Ok(TaskPage { data: envelope.data, success: envelope.success, total })
    }
}

#[async_trait]
impl FlowListProvider for HttpProvider {
    async fn query(&self, task_id: &str) -> Result<FlowPage, ProviderError> {
        let envelope: Envelope<Flow> = self
            .fetch(&self.flow_path, &[("taskID", task_id.to_string())])
            .await?;
        Ok(FlowPage { data: envelope.data, success: envelope.success })
    }
}
