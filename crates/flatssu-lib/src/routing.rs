use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use tracing::debug;

use crate::config::DataSources;
use crate::cost::RoutingMode;
use crate::dataset::load_graph;
use crate::error::{Error, Result};
use crate::graph::{Graph, LoadStats, NodeIndex};
use crate::path::{path_cost, shortest_path};

/// Route computed by [`PathEngine::find_route`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub mode: RoutingMode,
    pub start: NodeIndex,
    pub goal: NodeIndex,
    /// Node indices from start to goal; empty when unreachable.
    pub steps: Vec<NodeIndex>,
    /// Display names matching `steps`.
    pub names: Vec<String>,
    /// Total cost under `mode`; `None` when unreachable.
    pub cost: Option<u64>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn is_found(&self) -> bool {
        !self.steps.is_empty()
    }
}

/// Query façade over a reloadable graph.
///
/// Each query runs against an immutable snapshot; [`PathEngine::init_graph`]
/// builds a complete replacement before publishing it, so a query never
/// observes a partially loaded graph.
#[derive(Debug, Default)]
pub struct PathEngine {
    sources: DataSources,
    graph: RwLock<Arc<Graph>>,
}

impl PathEngine {
    /// Create an engine reading from `sources`. No data is loaded until
    /// [`PathEngine::init_graph`] is called.
    pub fn new(sources: DataSources) -> Self {
        Self {
            sources,
            graph: RwLock::new(Arc::new(Graph::default())),
        }
    }

    /// Create an engine around an already built graph.
    pub fn from_graph(graph: Graph) -> Self {
        let engine = Self::default();
        engine.replace_graph(graph);
        engine
    }

    /// Load both sources and publish the resulting graph. Safe to call again
    /// to reload; load failures leave an empty graph in place.
    pub fn init_graph(&self) -> LoadStats {
        self.replace_graph(load_graph(&self.sources))
    }

    /// Publish `graph` as the snapshot used by subsequent queries.
    pub fn replace_graph(&self, graph: Graph) -> LoadStats {
        let stats = graph.stats();
        let mut guard = self.graph.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(graph);
        stats
    }

    /// Current graph snapshot.
    pub fn snapshot(&self) -> Arc<Graph> {
        let guard = self.graph.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Shortest route by raw distance.
    pub fn find_shortest(&self, start: NodeIndex, goal: NodeIndex) -> Result<Vec<NodeIndex>> {
        self.find_path(start, goal, RoutingMode::Shortest)
    }

    /// Most convenient route (distance plus inconvenience penalty).
    pub fn find_convenient(&self, start: NodeIndex, goal: NodeIndex) -> Result<Vec<NodeIndex>> {
        self.find_path(start, goal, RoutingMode::Convenient)
    }

    /// Route between two indices under `mode`.
    ///
    /// An unloaded graph yields an empty route. Otherwise indices outside the
    /// graph are rejected with [`Error::NodeIndexOutOfRange`] so that bad input
    /// stays distinguishable from an unreachable goal.
    pub fn find_path(
        &self,
        start: NodeIndex,
        goal: NodeIndex,
        mode: RoutingMode,
    ) -> Result<Vec<NodeIndex>> {
        let graph = self.snapshot();
        find_path_in(&graph, start, goal, mode)
    }

    /// Like [`PathEngine::find_path`] but annotated with names and total cost.
    pub fn find_route(
        &self,
        start: NodeIndex,
        goal: NodeIndex,
        mode: RoutingMode,
    ) -> Result<RoutePlan> {
        let graph = self.snapshot();
        let steps = find_path_in(&graph, start, goal, mode)?;
        let names = steps
            .iter()
            .filter_map(|&index| graph.node_name(index))
            .map(str::to_string)
            .collect();
        let cost = if steps.is_empty() {
            None
        } else {
            path_cost(&graph, &steps, mode)
        };

        Ok(RoutePlan {
            mode,
            start,
            goal,
            steps,
            names,
            cost,
        })
    }

    /// Resolve a user supplied token that is either a node index or a node name.
    ///
    /// A number within the graph is taken as an index. A number past the last
    /// index is looked up as a name before being rejected, so a node named
    /// `"12"` in a smaller graph stays reachable.
    pub fn resolve(&self, token: &str) -> Result<NodeIndex> {
        let graph = self.snapshot();
        let token = token.trim();
        if let Ok(index) = token.parse::<NodeIndex>() {
            return match check_index(&graph, index) {
                Ok(()) => Ok(index),
                Err(err) => graph.index_by_name(token).ok_or(err),
            };
        }

        graph.index_by_name(token).ok_or_else(|| Error::UnknownNode {
            name: token.to_string(),
            suggestions: graph.fuzzy_node_matches(token, 3),
        })
    }
}

fn find_path_in(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    mode: RoutingMode,
) -> Result<Vec<NodeIndex>> {
    if graph.is_empty() {
        debug!(start, goal, "graph not loaded; returning empty route");
        return Ok(Vec::new());
    }
    check_index(graph, start)?;
    check_index(graph, goal)?;

    let path = shortest_path(graph, start, goal, mode);
    debug!(start, goal, %mode, hops = path.len().saturating_sub(1), "computed route");
    Ok(path)
}

fn check_index(graph: &Graph, index: NodeIndex) -> Result<()> {
    if index < graph.node_count() {
        Ok(())
    } else {
        Err(Error::NodeIndexOutOfRange {
            index,
            node_count: graph.node_count(),
        })
    }
}
