use async_trait::async_trait;
use redis::AsyncCommands;
use crate::model::{Flow, Task};
use crate::provider::{FlowListProvider, FlowPage, Pagination, ProviderError, TaskListProvider, TaskPage};

/// Reads results the detection backend publishes to Redis.
/// `<prefix>:tasks` is a list of JSON tasks, `<prefix>:task:<id>:flows` a list of JSON flows.
pub struct RedisProvider {
    client: redis::Client,
    key_prefix: String,
}

impl RedisProvider {
    pub fn new(client: redis::Client, key_prefix: String) -> Self {
        Self { client, key_prefix }
    }

    pub fn tasks_key(&self) -> String {
        format!("{}:tasks", self.key_prefix)
    }

    pub fn flows_key(&self, task_id: &str) -> String {
        format!("{}:task:{}:flows", self.key_prefix, task_id)
    }
}

/// Inclusive LRANGE bounds for one page. `stop` never drops below `start`,
/// since a negative index would wrap around to the end of the list.
fn page_bounds(pagination: Pagination) -> Result<(isize, isize), ProviderError> {
    let out_of_range = || ProviderError::Unavailable(format!("page out of range: {:?}", pagination));
    let start = isize::try_from(pagination.offset()).map_err(|_| out_of_range())?;
    let limit = isize::try_from(pagination.limit()).map_err(|_| out_of_range())?;
    let stop = start.checked_add(limit - 1).ok_or_else(out_of_range)?;
    Ok((start, stop))
}

#[async_trait]
impl TaskListProvider for RedisProvider {
    async fn query(&self, pagination: Pagination) -> Result<TaskPage, ProviderError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let key = self.tasks_key();
        let total: usize = conn.llen(&key).await?;
        let (start, stop) = page_bounds(pagination)?;
        let raw: Vec<String> = conn.lrange(&key, start, stop).await?;

        let data = raw
            .iter()
            .map(|s| serde_json::from_str::<Task>(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TaskPage { data, success: true, total })
    }
}

#[async_trait]
impl FlowListProvider for RedisProvider {
    async fn query(&self, task_id: &str) -> Result<FlowPage, ProviderError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        // A missing key reads as an empty list.
        let raw: Vec<String> = conn.lrange(self.flows_key(task_id), 0, -1).await?;
        let data = raw
            .iter()
            .map(|s| serde_json::from_str::<Flow>(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FlowPage { data, success: true })
    }
}
