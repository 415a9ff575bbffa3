//! Position tracking and replayable history for one flow instance.
//!
//! [`TraversalController`] owns the single mutable resource of the engine: the
//! current node id plus an append-only history of visited ids. Its operation
//! set is closed (`advance`, `retreat`, `jump_to`) and every operation is
//! all-or-nothing: on error, state is exactly what it was before the call.

use crate::error::TraversalError;
use crate::graph::Graph;
use ahash::AHashMap;

/// The replayable position state of one flow instance.
///
/// Invariant, preserved across every operation: `history` is never empty, its
/// first element is the start node, and its last element always equals
/// `current`. Duplicates are allowed when branching revisits a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalState {
    current: String,
    history: Vec<String>,
}

impl TraversalState {
    fn new(start: &str) -> Self {
        Self {
            current: start.to_string(),
            history: vec![start.to_string()],
        }
    }

    /// The node the interview is currently on.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Every node visited so far, in visit order, ending with the current node.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

/// Outcome of a [`TraversalController::retreat`] call.
///
/// `AtStart` is an expected control signal, not an error: the host decides
/// whether to hand control to an external "leave the flow" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved one step back; the previous history entry is now current.
    Moved,
    /// Already at the start node; nothing was popped.
    AtStart,
}

/// Drives forward, backward, and jump-back movement through a loaded graph.
///
/// One controller belongs to exactly one flow instance and is never shared
/// across instances or threads; the host serializes calls into it.
#[derive(Debug, Clone)]
pub struct TraversalController {
    state: TraversalState,
    answers: AHashMap<String, String>,
}

impl TraversalController {
    /// Creates a controller positioned at the graph's start node, with
    /// `history = [start]`.
    pub fn new(graph: &Graph) -> Self {
        Self {
            state: TraversalState::new(graph.start()),
            answers: AHashMap::new(),
        }
    }

    pub fn current(&self) -> &str {
        self.state.current()
    }

    pub fn history(&self) -> &[String] {
        self.state.history()
    }

    /// A snapshot view of the full traversal state.
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Answers recorded so far, keyed by the node id they were given at.
    pub fn answers(&self) -> &AHashMap<String, String> {
        &self.answers
    }

    /// Follows the outgoing edge at `edge_index` of the current node: sets the
    /// destination as current and appends it to history.
    ///
    /// If the chosen edge carries a guard label, that label is recorded as the
    /// answer for the departed node. Fails with
    /// [`TraversalError::InvalidChoice`] when the index is out of range for
    /// the current node's outgoing edges.
    pub fn advance(&mut self, graph: &Graph, edge_index: usize) -> Result<&str, TraversalError> {
        let edges = graph.outgoing(self.state.current());
        let Some(edge) = edges.get(edge_index) else {
            return Err(TraversalError::InvalidChoice {
                node_id: self.state.current.clone(),
                index: edge_index,
                available: edges.len(),
            });
        };

        if let Some(label) = &edge.when {
            self.answers
                .insert(self.state.current.clone(), label.clone());
        }
        self.state.current = edge.to.clone();
        self.state.history.push(edge.to.clone());
        Ok(self.state.current())
    }

    /// Records a caller-declared semantic answer for a node, overriding any
    /// guard label recorded by `advance`.
    pub fn record_answer(&mut self, node_id: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(node_id.into(), value.into());
    }

    /// Steps one entry back in history.
    ///
    /// Returns [`Retreat::AtStart`] without mutating anything when history
    /// holds only the start node.
    pub fn retreat(&mut self) -> Retreat {
        if self.state.history.len() <= 1 {
            return Retreat::AtStart;
        }
        self.state.history.pop();
        // History is nonempty here, so last() always yields.
        if let Some(previous) = self.state.history.last() {
            self.state.current = previous.clone();
        }
        Retreat::Moved
    }

    /// Rewinds to a previously visited node, truncating history to that point.
    ///
    /// Only valid for a node that appears in history strictly before the
    /// current position; when the node was revisited, the most recent prior
    /// occurrence wins. Fails with [`TraversalError::NotInHistory`] otherwise,
    /// leaving state untouched. This backs the "tap a past step to rewind"
    /// affordance.
    pub fn jump_to(&mut self, node_id: &str) -> Result<(), TraversalError> {
        let before_current = self.state.history.len() - 1;
        let Some(position) = self.state.history[..before_current]
            .iter()
            .rposition(|visited| visited == node_id)
        else {
            return Err(TraversalError::NotInHistory {
                node_id: node_id.to_string(),
            });
        };

        self.state.history.truncate(position + 1);
        self.state.current = node_id.to_string();
        Ok(())
    }
}
