//! Assembly of the completion payload at a true terminal node.
//!
//! [`CompletionAssembler`] combines the extracted artifacts, the full history,
//! and the recorded answers into one [`CompletionPayload`] and hands it to a
//! single host-supplied callback exactly once per flow instance.

use crate::artifacts;
use crate::error::CompletionError;
use crate::graph::Graph;
use crate::script::NodeKind;
use crate::traversal::TraversalController;
use ahash::AHashMap;

/// The structured summary handed to the host when an interview completes.
///
/// The host typically forwards this to its queue-registration or notification
/// code; the engine itself performs no I/O with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionPayload {
    /// Every node visited, in visit order, ending at the terminal node.
    pub history: Vec<String>,
    /// Recorded answers, keyed by the node id they were given at.
    pub answers: AHashMap<String, String>,
    /// Recognized form identifiers, ordered by first appearance.
    pub artifacts: Vec<String>,
}

/// Host-supplied completion callback. Consumed on first use: it can only ever
/// fire once per flow instance.
pub type CompletionHandler = Box<dyn FnOnce(&CompletionPayload)>;

/// Builds the completion payload and enforces the once-only callback
/// discipline.
pub struct CompletionAssembler {
    handler: Option<CompletionHandler>,
    payload: Option<CompletionPayload>,
}

impl CompletionAssembler {
    pub fn new(handler: Option<CompletionHandler>) -> Self {
        Self {
            handler,
            payload: None,
        }
    }

    /// Drops the cached payload. Called by the session on every movement, so
    /// a later `finish` reflects the new position.
    pub fn invalidate(&mut self) {
        self.payload = None;
    }

    /// Assembles the payload for the controller's current node.
    ///
    /// Legal only when the current node is a true terminal: explicitly tagged
    /// `terminal`/`end` without a route target, or left with zero outgoing
    /// edges (the defensive implicit-terminal fallback). Calling `finish`
    /// again without an intervening movement is a no-op returning the
    /// previously produced payload; the callback never fires twice.
    pub fn finish(
        &mut self,
        graph: &Graph,
        controller: &TraversalController,
    ) -> Result<&CompletionPayload, CompletionError> {
        let payload = match self.payload.take() {
            Some(existing) => existing,
            None => {
                let node_id = controller.current();
                let exhausted = graph.outgoing(node_id).is_empty();
                let node = graph.node(node_id);
                let tagged_terminal =
                    node.is_some_and(|n| matches!(n.kind, NodeKind::Terminal | NodeKind::End));

                if !exhausted && !tagged_terminal {
                    return Err(CompletionError::NotTerminal {
                        node_id: node_id.to_string(),
                    });
                }
                if let Some(target) = node.and_then(|n| n.route_target.as_deref()) {
                    return Err(CompletionError::RoutedTerminal {
                        node_id: node_id.to_string(),
                        target: target.to_string(),
                    });
                }

                let set = artifacts::extract(graph, controller.history(), controller.answers());
                let payload = CompletionPayload {
                    history: controller.history().to_vec(),
                    answers: set.answers,
                    artifacts: set.forms,
                };
                if let Some(handler) = self.handler.take() {
                    handler(&payload);
                }
                payload
            }
        };
        Ok(self.payload.insert(payload))
    }
}
