use std::collections::HashSet;

/// Expanded rows of the flow table, keyed by `flow_id`.
#[derive(Debug, Default)]
pub struct RowExpansionTracker {
    expanded: HashSet<String>,
}

impl RowExpansionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new expansion state of the row.
    pub fn toggle(&mut self, flow_id: &str) -> bool {
        if self.expanded.remove(flow_id) {
            false
        } else {
            self.expanded.insert(flow_id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, flow_id: &str) -> bool {
        self.expanded.contains(flow_id)
    }

    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.expanded.retain(|id| keep(id));
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn expanded(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.expanded.iter().cloned().collect();
        ids.sort();
        ids
    }
}
