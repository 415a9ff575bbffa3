//! Decides how the current node is presented to the user.
//!
//! Given the current node and its outgoing edges, [`resolve`] computes a
//! [`Presentation`]: exhausted, auto-advance, a single continue action, or a
//! multi-way menu. Presentation order is exactly authoring order; no
//! reordering or prioritization is ever applied.

use crate::error::TraversalError;
use crate::graph::{Edge, Graph};
use crate::script::NodeKind;

/// One selectable outgoing edge of the current node.
///
/// `index` is the edge's position within the node's outgoing list and is the
/// value passed to [`TraversalController::advance`](crate::traversal::TraversalController::advance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice<'g> {
    pub index: usize,
    pub edge: &'g Edge,
}

/// One entry of a multi-way menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItem<'g> {
    /// A selectable button. The label is the edge's guard label, falling back
    /// to the destination node's display text when no guard label is present.
    Button { choice: Choice<'g>, label: &'g str },
    /// Pass-through informational content, rendered as an inline text panel
    /// rather than a button.
    Panel { choice: Choice<'g>, text: &'g str },
    /// The final panel of a contiguous informational run, rendered with a
    /// single continue action so the user can proceed past the whole run.
    PanelContinue { choice: Choice<'g>, text: &'g str },
}

impl<'g> MenuItem<'g> {
    /// The underlying edge choice, whatever the rendering.
    pub fn choice(&self) -> Choice<'g> {
        match self {
            MenuItem::Button { choice, .. }
            | MenuItem::Panel { choice, .. }
            | MenuItem::PanelContinue { choice, .. } => *choice,
        }
    }
}

/// How the current node should be presented.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<'g> {
    /// Zero outgoing edges. The node is treated as an implicit terminal even
    /// if not tagged so, and the host should assemble the completion payload.
    Exhausted,
    /// Exactly one unguarded edge out of an informational node: the host
    /// advances immediately, without user interaction, in a single
    /// synchronous step.
    AutoAdvance(Choice<'g>),
    /// Exactly one outgoing edge in every other single-edge case: present one
    /// "continue" action.
    SingleContinue(Choice<'g>),
    /// Two or more outgoing edges: a selectable menu, in authored order.
    Menu(Vec<MenuItem<'g>>),
}

/// Computes the presentation for the node at `node_id`.
///
/// An unknown node id is a hard error, never clamped: the traversal layer
/// guarantees the current id is valid, so hitting this means a host wiring
/// bug.
pub fn resolve<'g>(graph: &'g Graph, node_id: &str) -> Result<Presentation<'g>, TraversalError> {
    let node = graph.node(node_id).ok_or_else(|| TraversalError::UnknownNode {
        node_id: node_id.to_string(),
    })?;
    let edges = graph.outgoing(node_id);

    match edges {
        [] => Ok(Presentation::Exhausted),
        [edge] => {
            let choice = Choice { index: 0, edge };
            if node.kind == NodeKind::Informational && edge.when.is_none() {
                Ok(Presentation::AutoAdvance(choice))
            } else {
                Ok(Presentation::SingleContinue(choice))
            }
        }
        _ => Ok(Presentation::Menu(build_menu(graph, edges))),
    }
}

/// Builds menu items in authored order, suppressing edges into informational
/// nodes as inline panels. The last panel of each contiguous run keeps a
/// continue action.
fn build_menu<'g>(graph: &'g Graph, edges: &'g [Edge]) -> Vec<MenuItem<'g>> {
    let is_panel: Vec<bool> = edges
        .iter()
        .map(|edge| {
            graph
                .node(&edge.to)
                .is_some_and(|destination| destination.kind == NodeKind::Informational)
        })
        .collect();

    edges
        .iter()
        .enumerate()
        .map(|(index, edge)| {
            let choice = Choice { index, edge };
            if is_panel[index] {
                // Destination text is the panel body.
                let text = destination_text(graph, edge);
                let run_ends_here = !is_panel.get(index + 1).copied().unwrap_or(false);
                if run_ends_here {
                    MenuItem::PanelContinue { choice, text }
                } else {
                    MenuItem::Panel { choice, text }
                }
            } else {
                let label = edge
                    .when
                    .as_deref()
                    .unwrap_or_else(|| destination_text(graph, edge));
                MenuItem::Button { choice, label }
            }
        })
        .collect()
}

fn destination_text<'g>(graph: &'g Graph, edge: &Edge) -> &'g str {
    // Load validation guarantees the destination exists.
    graph.node(&edge.to).map(|n| n.text.as_str()).unwrap_or("")
}
