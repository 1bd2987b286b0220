use crate::types::ItemId;
use serde::{Deserialize, Serialize};

/// A directed edge between two shapes of the same process.
///
/// Endpoints are weak references by shape id. In-memory node access goes
/// through [`crate::core::ProcessGraph`], which is rebuilt per editing
/// session and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessLink {
    pub source_id: ItemId,
    pub destination_id: ItemId,
    /// The process the link belongs to.
    #[serde(default)]
    pub parent_id: ItemId,
    /// Ordering among a shape's outgoing links; fractional values are used
    /// when a branch is inserted between two existing ones.
    pub orderindex: f64,
    /// Branch label, e.g. a decision condition. Empty when unlabeled.
    #[serde(default)]
    pub label: String,
}

impl ProcessLink {
    pub fn new(source_id: ItemId, destination_id: ItemId, orderindex: f64) -> Self {
        Self {
            source_id,
            destination_id,
            parent_id: ItemId::default(),
            orderindex,
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_parent(mut self, parent_id: ItemId) -> Self {
        self.parent_id = parent_id;
        self
    }
}
