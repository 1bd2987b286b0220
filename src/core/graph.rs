use crate::core::flow::ProcessFlow;
use crate::core::link::ProcessLink;
use crate::core::process::Process;
use crate::core::shape::ProcessShape;
use crate::error::ModelError;
use crate::types::ItemId;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Bfs, EdgeRef, Reversed};
use petgraph::Direction;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Transient traversal index over a process document.
///
/// Built per editing session from the durable model and discarded with it;
/// never serialized. This stands in for node back-references on links: given
/// a link, [`ProcessGraph::shape`] resolves either endpoint in O(1).
#[derive(Debug)]
pub struct ProcessGraph<'p> {
    graph: DiGraph<&'p ProcessShape, &'p ProcessLink>,
    nodes: HashMap<ItemId, NodeIndex>,
}

impl<'p> ProcessGraph<'p> {
    /// Index a process. The document is validated first, so the index never
    /// holds a dangling edge.
    pub fn build(process: &'p Process) -> Result<Self, ModelError> {
        process.validate()?;

        let mut graph = DiGraph::with_capacity(process.shapes.len(), process.links.len());
        let mut nodes = HashMap::with_capacity(process.shapes.len());
        for shape in &process.shapes {
            nodes.insert(shape.id, graph.add_node(shape));
        }
        for link in &process.links {
            // Endpoints resolve; validate() checked them above
            graph.add_edge(nodes[&link.source_id], nodes[&link.destination_id], link);
        }

        debug!(
            process = %process.id,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "process graph indexed"
        );
        Ok(Self { graph, nodes })
    }

    pub fn shape(&self, id: ItemId) -> Option<&'p ProcessShape> {
        self.nodes.get(&id).map(|&n| self.graph[n])
    }

    /// Shapes directly downstream of `id`, in branch order.
    pub fn successors(&self, id: ItemId) -> Vec<&'p ProcessShape> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Shapes directly upstream of `id`.
    pub fn predecessors(&self, id: ItemId) -> Vec<&'p ProcessShape> {
        self.neighbors(id, Direction::Incoming)
    }

    fn neighbors(&self, id: ItemId, direction: Direction) -> Vec<&'p ProcessShape> {
        let Some(&node) = self.nodes.get(&id) else {
            return Vec::new();
        };
        let mut out: Vec<(&'p ProcessLink, &'p ProcessShape)> = self
            .graph
            .edges_directed(node, direction)
            .map(|e| {
                let other = match direction {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (*e.weight(), self.graph[other])
            })
            .collect();
        out.sort_by(|a, b| a.0.orderindex.total_cmp(&b.0.orderindex));
        out.into_iter().map(|(_, s)| s).collect()
    }

    pub fn is_reachable(&self, from: ItemId, to: ItemId) -> bool {
        match (self.nodes.get(&from), self.nodes.get(&to)) {
            (Some(&a), Some(&b)) => petgraph::algo::has_path_connecting(&self.graph, a, b, None),
            _ => false,
        }
    }

    /// Extract the flow bounded by `start` and `end`: every shape lying on
    /// some directed path between them. Returns `None` when `end` is not
    /// reachable from `start`.
    pub fn flow_between(
        &self,
        start: ItemId,
        end: ItemId,
        parent: Option<usize>,
        orderindex: f64,
    ) -> Option<ProcessFlow<'p>> {
        let (&a, &b) = (self.nodes.get(&start)?, self.nodes.get(&end)?);

        let forward = self.reach(a, false);
        if !forward.contains(&b) {
            return None;
        }
        let backward = self.reach(b, true);

        let shapes: HashMap<ItemId, &'p ProcessShape> = forward
            .intersection(&backward)
            .map(|&n| {
                let shape = self.graph[n];
                (shape.id, shape)
            })
            .collect();

        Some(ProcessFlow {
            parent,
            orderindex,
            start_shape_id: start,
            end_shape_id: end,
            shapes,
        })
    }

    fn reach(&self, from: NodeIndex, reversed: bool) -> HashSet<NodeIndex> {
        let mut seen = HashSet::new();
        if reversed {
            let rev = Reversed(&self.graph);
            let mut bfs = Bfs::new(rev, from);
            while let Some(n) = bfs.next(rev) {
                seen.insert(n);
            }
        } else {
            let mut bfs = Bfs::new(&self.graph, from);
            while let Some(n) = bfs.next(&self.graph) {
                seen.insert(n);
            }
        }
        seen
    }
}
