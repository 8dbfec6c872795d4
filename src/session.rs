use std::collections::HashMap;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::{self, JoinSet};
use tracing::{error, info, warn};
use uuid::Uuid;
use crate::model::Task;
use crate::provider::{FlowListProvider, FlowPage, Pagination, ProviderError, TaskListProvider, TaskPage};
use crate::view::{Completion, DetailViewOrchestrator, FetchRequest, ViewSnapshot};

/// 操作员可发出的界面指令
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum UiCommand {
    Select { task_id: String },
    Clear,
    Toggle { flow_id: String },
    Refresh,
}

type FetchOutcome = (FetchRequest, Result<FlowPage, ProviderError>);

/// Drives a [`DetailViewOrchestrator`] against real providers.
///
/// Operator commands are applied synchronously; flow fetches run as spawned
/// tasks and land through [`ReviewSession::next_completion`]. Overlapping
/// fetches are allowed, the orchestrator discards every response but the newest.
pub struct ReviewSession {
    id: Uuid,
    tasks: Arc<dyn TaskListProvider>,
    flows: Arc<dyn FlowListProvider>,
    view: DetailViewOrchestrator,
    task_page: TaskPage,
    in_flight: JoinSet<FetchOutcome>,
    // Request behind each spawned fetch, so an aborted task still completes.
    requests: HashMap<task::Id, FetchRequest>,
    snapshots: watch::Sender<ViewSnapshot>,
}

impl ReviewSession {
    pub fn new(tasks: Arc<dyn TaskListProvider>, flows: Arc<dyn FlowListProvider>) -> Self {
        let view = DetailViewOrchestrator::new();
        let (snapshots, _) = watch::channel(view.snapshot());
        Self {
            id: Uuid::new_v4(),
            tasks,
            flows,
            view,
            task_page: TaskPage { data: Vec::new(), success: true, total: 0 },
            in_flight: JoinSet::new(),
            requests: HashMap::new(),
            snapshots,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn view(&self) -> &DetailViewOrchestrator {
        &self.view
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn task_page(&self) -> &TaskPage {
        &self.task_page
    }

    /// Looks a task up in the last loaded page.
    pub fn resolve_task(&self, task_id: &str) -> Option<&Task> {
        self.task_page.data.iter().find(|t| t.task_id == task_id)
    }

    /// Loads one page of the task panel. Failures degrade to an empty page
    /// flagged `success = false`.
    pub async fn load_tasks(&mut self, pagination: Pagination) -> &TaskPage {
        self.task_page = match self.tasks.query(pagination).await {
            Ok(page) => {
                if !page.success {
                    warn!(session_id = %self.id, "Task provider reported failure");
                }
                page
            }
            Err(e) => {
                warn!(session_id = %self.id, error = %e, "Failed to load task list");
                TaskPage::failed()
            }
        };
        info!(session_id = %self.id, count = self.task_page.data.len(), total = self.task_page.total, "Task page loaded");
        &self.task_page
    }

    pub fn select(&mut self, task_id: &str) -> bool {
        let request = self.view.select(task_id);
        self.after_transition(request)
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.view.clear();
        self.publish();
        changed
    }

    pub fn refresh(&mut self) -> bool {
        let request = self.view.refresh();
        self.after_transition(request)
    }

    pub fn toggle_row(&mut self, flow_id: &str) -> bool {
        let applied = self.view.toggle_row(flow_id);
        if applied {
            self.publish();
        }
        applied
    }

    pub fn dispatch(&mut self, command: UiCommand) -> bool {
        match command {
            UiCommand::Select { task_id } => self.select(&task_id),
            UiCommand::Clear => self.clear(),
            UiCommand::Toggle { flow_id } => self.toggle_row(&flow_id),
            UiCommand::Refresh => self.refresh(),
        }
    }

    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Waits for the next outstanding fetch and applies it.
    /// Returns `None` once nothing is in flight. A fetch task that panicked
    /// or was cancelled completes its request as a provider failure.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        loop {
            let (request, outcome) = match self.in_flight.join_next_with_id().await? {
                Ok((id, (request, outcome))) => {
                    self.requests.remove(&id);
                    (request, outcome)
                }
                Err(e) => {
                    error!(session_id = %self.id, error = %e, "Flow fetch task aborted");
                    let Some(request) = self.requests.remove(&e.id()) else {
                        continue;
                    };
                    (request, Err(ProviderError::Unavailable(e.to_string())))
                }
            };
            let completion = self.view.complete(&request, outcome);
            if completion == Completion::Applied {
                self.publish();
            }
            return Some(completion);
        }
    }

    /// Drains every outstanding fetch.
    pub async fn settle(&mut self) {
        while self.next_completion().await.is_some() {}
    }

    fn after_transition(&mut self, request: Option<FetchRequest>) -> bool {
        self.publish();
        let Some(request) = request else {
            return false;
        };
        info!(session_id = %self.id, task_id = %request.task_id, request_id = request.request_id, "Fetching flows");
        let flows = self.flows.clone();
        let tracked = request.clone();
        let handle = self.in_flight.spawn(async move {
            let outcome = flows.query(&request.task_id).await;
            (request, outcome)
        });
        self.requests.insert(handle.id(), tracked);
        true
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.view.snapshot());
    }
}
