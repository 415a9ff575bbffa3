//! The host-facing driver for one live interview.
//!
//! A [`FlowSession`] ties the loaded graph, the traversal controller, and the
//! completion assembler together behind one object the rendering layer talks
//! to. One session is one flow instance: it owns the only mutable state and
//! expects serialized calls (one UI event loop, or one actor/lock per session
//! id on a server).

use crate::completion::{CompletionAssembler, CompletionHandler, CompletionPayload};
use crate::error::{CompletionError, TraversalError};
use crate::graph::Graph;
use crate::resolver::{self, Presentation};
use crate::routing;
use crate::traversal::{Retreat, TraversalController};
use ahash::AHashMap;

/// Host-supplied route-navigation callback: `(route_target, last_node_id)`.
pub type RouteHandler = Box<dyn FnMut(&str, &str)>;

/// Builder for a [`FlowSession`], following the usual construction pattern:
/// attach the optional host callbacks, then `build()`.
pub struct FlowSessionBuilder {
    graph: Graph,
    on_completion: Option<CompletionHandler>,
    on_route: Option<RouteHandler>,
}

impl FlowSessionBuilder {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            on_completion: None,
            on_route: None,
        }
    }

    /// Attaches the completion callback, invoked exactly once per flow
    /// instance when the interview finishes at a true terminal.
    pub fn on_completion(mut self, handler: impl FnOnce(&CompletionPayload) + 'static) -> Self {
        self.on_completion = Some(Box::new(handler));
        self
    }

    /// Attaches the route-navigation callback, invoked when the interview
    /// reaches a routing terminal.
    pub fn on_route(mut self, handler: impl FnMut(&str, &str) + 'static) -> Self {
        self.on_route = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> FlowSession {
        let controller = TraversalController::new(&self.graph);
        FlowSession {
            graph: self.graph,
            controller,
            assembler: CompletionAssembler::new(self.on_completion),
            on_route: self.on_route,
        }
    }
}

/// One live run of the engine over one loaded graph.
pub struct FlowSession {
    graph: Graph,
    controller: TraversalController,
    assembler: CompletionAssembler,
    on_route: Option<RouteHandler>,
}

impl FlowSession {
    /// Starts building a session for a loaded graph.
    pub fn builder(graph: Graph) -> FlowSessionBuilder {
        FlowSessionBuilder::new(graph)
    }

    /// Creates a session with no host callbacks attached.
    pub fn new(graph: Graph) -> Self {
        Self::builder(graph).build()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn current(&self) -> &str {
        self.controller.current()
    }

    pub fn history(&self) -> &[String] {
        self.controller.history()
    }

    pub fn answers(&self) -> &AHashMap<String, String> {
        self.controller.answers()
    }

    /// Computes the presentation for the current node. Called by the host on
    /// every render cycle.
    pub fn present(&self) -> Result<Presentation<'_>, TraversalError> {
        resolver::resolve(&self.graph, self.controller.current())
    }

    /// Follows the outgoing edge at `edge_index` of the current node.
    pub fn advance(&mut self, edge_index: usize) -> Result<(), TraversalError> {
        self.controller.advance(&self.graph, edge_index)?;
        self.assembler.invalidate();
        Ok(())
    }

    /// Steps one entry back in history.
    pub fn retreat(&mut self) -> Retreat {
        let outcome = self.controller.retreat();
        if outcome == Retreat::Moved {
            self.assembler.invalidate();
        }
        outcome
    }

    /// Rewinds to a previously visited node.
    pub fn jump_to(&mut self, node_id: &str) -> Result<(), TraversalError> {
        self.controller.jump_to(node_id)?;
        self.assembler.invalidate();
        Ok(())
    }

    /// Records a caller-declared semantic answer for a node.
    pub fn record_answer(&mut self, node_id: impl Into<String>, value: impl Into<String>) {
        self.controller.record_answer(node_id, value);
    }

    /// Applies pending auto-advance transitions, one synchronous step at a
    /// time, until the current node requires user input or terminates.
    ///
    /// Each step goes through [`FlowSession::advance`], so history stays
    /// consistent even if the host discards the session mid-run.
    ///
    /// Load validation only constrains leaves, so a cycle of unguarded
    /// informational nodes is a loadable graph. An auto-advance chain longer
    /// than the node count must have revisited such a node; the run is capped
    /// there and reported as [`TraversalError::AutoAdvanceCycle`], leaving
    /// the session at a valid position inside the chain.
    pub fn settle(&mut self) -> Result<(), TraversalError> {
        let limit = self.graph.node_count();
        let mut steps = 0usize;
        loop {
            let next = match self.present()? {
                Presentation::AutoAdvance(choice) => Some(choice.index),
                _ => None,
            };
            match next {
                Some(index) => {
                    if steps >= limit {
                        return Err(TraversalError::AutoAdvanceCycle {
                            node_id: self.controller.current().to_string(),
                            limit,
                        });
                    }
                    self.advance(index)?;
                    steps += 1;
                }
                None => return Ok(()),
            }
        }
    }

    /// The route target of the current node, if it is a routing terminal.
    pub fn route_target(&self) -> Option<&str> {
        routing::route_target(&self.graph, self.controller.current())
    }

    /// Transfers control out of this flow if the current node routes.
    ///
    /// Fires the route-navigation callback with the target and the last node
    /// id, and returns the target. The host must then abandon this session;
    /// no completion is ever assembled for a routed exit.
    pub fn route(&mut self) -> Option<String> {
        let target = self.route_target()?.to_string();
        if let Some(handler) = self.on_route.as_mut() {
            handler(&target, self.controller.current());
        }
        Some(target)
    }

    /// Assembles the completion payload for the current (terminal) node and
    /// fires the completion callback on first success.
    ///
    /// Calling again without an intervening movement returns the cached
    /// payload without re-firing the callback.
    pub fn finish(&mut self) -> Result<&CompletionPayload, CompletionError> {
        self.assembler.finish(&self.graph, &self.controller)
    }
}
