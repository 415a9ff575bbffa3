//! Cross-flow routing: terminals that hand off instead of completing.
//!
//! A routing terminal carries a `routeTarget` naming another flow or page.
//! Reaching one is a hard exit from the current interview: the host abandons
//! the flow instance and transfers control, passing no mutable state back.
//! Completion is never assembled for a routed terminal.

use crate::graph::Graph;

/// Returns the route target of the node at `node_id`, if it is a routing
/// terminal.
pub fn route_target<'g>(graph: &'g Graph, node_id: &str) -> Option<&'g str> {
    graph.node(node_id)?.route_target.as_deref()
}

/// Scans history for routed nodes, most recently visited first.
///
/// A well-formed graph reaches at most one routing terminal per traversal;
/// this check exists for the degenerate case where several visited nodes
/// carry route tags, in which the most recent visit wins. Returns the routed
/// node's id together with its target.
pub fn latest_route_in_history<'g>(
    graph: &'g Graph,
    history: &'g [String],
) -> Option<(&'g str, &'g str)> {
    history.iter().rev().find_map(|node_id| {
        route_target(graph, node_id).map(|target| (node_id.as_str(), target))
    })
}
