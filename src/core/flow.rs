use crate::core::shape::ProcessShape;
use crate::error::ModelError;
use crate::types::ItemId;
use std::collections::HashMap;
use tracing::debug;

/// A sub-path of the process graph bounded by a start and end shape.
///
/// The shape mapping is a view into the owning process's shape set, not a
/// second ownership domain. Flows form a forest: a flow's parent, if any, is
/// an earlier entry in the same [`FlowSet`].
#[derive(Debug, Clone)]
pub struct ProcessFlow<'p> {
    pub parent: Option<usize>,
    pub orderindex: f64,
    pub start_shape_id: ItemId,
    pub end_shape_id: ItemId,
    pub shapes: HashMap<ItemId, &'p ProcessShape>,
}

impl<'p> ProcessFlow<'p> {
    pub fn contains(&self, id: ItemId) -> bool {
        self.shapes.contains_key(&id)
    }
}

/// Flows of one editing session, arena-style so parent references are plain
/// indices. Parents outlive children because a parent index always precedes
/// the child's own index.
#[derive(Debug, Clone, Default)]
pub struct FlowSet<'p> {
    flows: Vec<ProcessFlow<'p>>,
}

impl<'p> FlowSet<'p> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flow, checking that its parent precedes it and that both
    /// boundary shapes are in the flow's own mapping.
    pub fn push(&mut self, flow: ProcessFlow<'p>) -> Result<usize, ModelError> {
        let index = self.flows.len();
        if let Some(parent) = flow.parent {
            if parent >= index {
                return Err(ModelError::FlowParentOrder { flow: index, parent });
            }
        }
        for boundary in [flow.start_shape_id, flow.end_shape_id] {
            if !flow.contains(boundary) {
                return Err(ModelError::FlowBoundaryOutsideFlow {
                    flow: index,
                    shape: boundary,
                });
            }
        }
        debug!(flow = index, shapes = flow.shapes.len(), "flow added");
        self.flows.push(flow);
        Ok(index)
    }

    pub fn get(&self, index: usize) -> Option<&ProcessFlow<'p>> {
        self.flows.get(index)
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessFlow<'p>> {
        self.flows.iter()
    }

    /// Indices of the flows nested directly under `parent`.
    pub fn children(&self, parent: usize) -> Vec<usize> {
        self.flows
            .iter()
            .enumerate()
            .filter(|(_, f)| f.parent == Some(parent))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enums::ProcessShapeType;

    fn shapes() -> Vec<ProcessShape> {
        vec![
            ProcessShape::new(ItemId(10), "Start", ProcessShapeType::Start),
            ProcessShape::new(ItemId(20), "Task", ProcessShapeType::UserTask),
            ProcessShape::new(ItemId(30), "End", ProcessShapeType::End),
        ]
    }

    fn flow_over<'p>(
        shapes: &'p [ProcessShape],
        parent: Option<usize>,
        start: ItemId,
        end: ItemId,
    ) -> ProcessFlow<'p> {
        ProcessFlow {
            parent,
            orderindex: 0.0,
            start_shape_id: start,
            end_shape_id: end,
            shapes: shapes.iter().map(|s| (s.id, s)).collect(),
        }
    }

    #[test]
    fn push_accepts_valid_flow_tree() {
        let shapes = shapes();
        let mut set = FlowSet::new();
        let root = set
            .push(flow_over(&shapes, None, ItemId(10), ItemId(30)))
            .unwrap();
        let child = set
            .push(flow_over(&shapes, Some(root), ItemId(10), ItemId(20)))
            .unwrap();
        assert_eq!(set.children(root), vec![child]);
    }

    #[test]
    fn push_rejects_forward_parent() {
        let shapes = shapes();
        let mut set = FlowSet::new();
        let err = set
            .push(flow_over(&shapes, Some(3), ItemId(10), ItemId(30)))
            .unwrap_err();
        assert_eq!(err, ModelError::FlowParentOrder { flow: 0, parent: 3 });
    }

    #[test]
    fn push_rejects_boundary_outside_mapping() {
        let shapes = shapes();
        let mut set = FlowSet::new();
        let err = set
            .push(flow_over(&shapes, None, ItemId(10), ItemId(99)))
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::FlowBoundaryOutsideFlow {
                flow: 0,
                shape: ItemId(99)
            }
        );
    }
}
