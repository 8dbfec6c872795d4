pub mod columns;
pub mod expansion;
pub mod orchestrator;
pub mod selection;

pub use columns::{FlowColumn, PanelLayout, TaskColumn, ValueKind, task_columns};
pub use expansion::RowExpansionTracker;
pub use orchestrator::{Completion, DetailState, DetailViewOrchestrator, FetchRequest, ViewSnapshot};
pub use selection::{SelectionChange, SelectionController};
