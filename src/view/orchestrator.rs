use serde::Serialize;
use tracing::{debug, info, warn};
use crate::model::Flow;
use crate::provider::{FlowPage, ProviderError};
use crate::view::columns::{PanelLayout, TaskColumn, task_columns};
use crate::view::expansion::RowExpansionTracker;
use crate::view::selection::{SelectionChange, SelectionController};

/// A flow fetch the caller must run against a `FlowListProvider` and hand
/// back through [`DetailViewOrchestrator::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub task_id: String,
    pub request_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    NoSelection,
    Loading { task_id: String, request_id: u64 },
    Loaded { task_id: String, flows: Vec<Flow> },
    Failed { task_id: String, reason: String },
}

impl DetailState {
    pub fn task_id(&self) -> Option<&str> {
        match self {
            DetailState::NoSelection => None,
            DetailState::Loading { task_id, .. }
            | DetailState::Loaded { task_id, .. }
            | DetailState::Failed { task_id, .. } => Some(task_id.as_str()),
        }
    }

    fn phase(&self) -> &'static str {
        match self {
            DetailState::NoSelection => "noSelection",
            DetailState::Loading { .. } => "loading",
            DetailState::Loaded { .. } => "loaded",
            DetailState::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued (or the selection cleared) after this one.
    Stale,
}

/// Serialisable view of the whole screen state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub selected: Option<String>,
    pub columns: Vec<TaskColumn>,
    pub layout: PanelLayout,
    pub phase: &'static str,
    pub flows: Vec<Flow>,
    pub expanded: Vec<String>,
    pub error: Option<String>,
}

/// 详情视图状态机
///
/// Selection, column schema, expansion set and flow data live in one container
/// and only move together through `select`, `clear`, `refresh` and `complete`.
/// Every fetch is tagged with a sequence number; only the newest one may land.
#[derive(Debug)]
pub struct DetailViewOrchestrator {
    selection: SelectionController,
    expansion: RowExpansionTracker,
    columns: &'static [TaskColumn],
    state: DetailState,
    last_request_id: u64,
}

impl Default for DetailViewOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailViewOrchestrator {
    pub fn new() -> Self {
        Self {
            selection: SelectionController::new(),
            expansion: RowExpansionTracker::new(),
            columns: task_columns(false),
            state: DetailState::NoSelection,
            last_request_id: 0,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    pub fn columns(&self) -> &'static [TaskColumn] {
        self.columns
    }

    pub fn layout(&self) -> PanelLayout {
        PanelLayout::for_selection(self.selection.has_selection())
    }

    /// Flows currently displayed; empty unless `Loaded`.
    pub fn flows(&self) -> &[Flow] {
        match &self.state {
            DetailState::Loaded { flows, .. } => flows,
            _ => &[],
        }
    }

    pub fn is_expanded(&self, flow_id: &str) -> bool {
        self.expansion.is_expanded(flow_id)
    }

    pub fn select(&mut self, task_id: impl Into<String>) -> Option<FetchRequest> {
        let change = self.selection.select(task_id)?;
        self.on_selection_changed(change)
    }

    pub fn clear(&mut self) -> bool {
        match self.selection.clear() {
            Some(change) => {
                self.on_selection_changed(change);
                true
            }
            None => false,
        }
    }

    /// Re-issues the fetch for the current selection, keeping expanded rows
    /// that still exist once the new data lands.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        let task_id = self.selection.selected()?.to_string();
        Some(self.issue_fetch(task_id))
    }

    fn on_selection_changed(&mut self, change: SelectionChange) -> Option<FetchRequest> {
        self.expansion.reset();
        self.columns = task_columns(change.current.is_some());
        info!(previous = ?change.previous, current = ?change.current, "Selection changed");

        match change.current {
            Some(task_id) => Some(self.issue_fetch(task_id)),
            None => {
                self.state = DetailState::NoSelection;
                None
            }
        }
    }

    fn issue_fetch(&mut self, task_id: String) -> FetchRequest {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.state = DetailState::Loading { task_id: task_id.clone(), request_id };
        FetchRequest { task_id, request_id }
    }

    pub fn complete(&mut self, request: &FetchRequest, outcome: Result<FlowPage, ProviderError>) -> Completion {
        let current = match &self.state {
            DetailState::Loading { request_id, .. } => *request_id,
            _ => 0,
        };
        if current != request.request_id {
            warn!(task_id = %request.task_id, request_id = request.request_id, "Discarding stale flow response");
            return Completion::Stale;
        }

        let task_id = request.task_id.clone();
        self.state = match outcome {
            Ok(page) if page.success => {
                let received = page.data.len();
                let flows: Vec<Flow> = page.data.into_iter().filter(|f| f.task_id == task_id).collect();
                if flows.len() != received {
                    warn!(task_id = %task_id, dropped = received - flows.len(), "Dropped flows belonging to another task");
                }
                self.expansion.retain(|id| flows.iter().any(|f| f.flow_id == id));
                info!(task_id = %task_id, count = flows.len(), "Flows loaded");
                DetailState::Loaded { task_id, flows }
            }
            Ok(_) => {
                warn!(task_id = %task_id, "Flow provider reported failure");
                self.expansion.reset();
                DetailState::Failed { task_id, reason: "provider reported failure".to_string() }
            }
            Err(e) => {
                warn!(task_id = %task_id, error = %e, "Flow fetch failed");
                self.expansion.reset();
                DetailState::Failed { task_id, reason: e.to_string() }
            }
        };
        Completion::Applied
    }

    /// Only rows of the loaded flow set can be expanded.
    pub fn toggle_row(&mut self, flow_id: &str) -> bool {
        if !self.flows().iter().any(|f| f.flow_id == flow_id) {
            debug!(flow_id = %flow_id, "Ignoring toggle for row not in the loaded set");
            return false;
        }
        self.expansion.toggle(flow_id);
        true
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            selected: self.selection.selected().map(str::to_string),
            columns: self.columns.to_vec(),
            layout: self.layout(),
            phase: self.state.phase(),
            flows: self.flows().to_vec(),
            expanded: self.expansion.expanded(),
            error: match &self.state {
                DetailState::Failed { reason, .. } => Some(reason.clone()),
                _ => None,
            },
        }
    }
}
