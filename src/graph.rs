//! The validated, immutable interview graph.
//!
//! A [`Graph`] is constructed exactly once per flow instance from a
//! [`FlowDocument`](crate::script::FlowDocument) and never mutated afterwards.
//! All structural validation happens here, at load time: traversal code may
//! assume every node id it encounters resolves.

use crate::error::LoadError;
use crate::script::{FlowDocument, NodeKind};
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A single screen of the interview, with its kind resolved at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Display text. May embed form-identifier tokens such as `DV-100`.
    pub text: String,
    pub kind: NodeKind,
    /// Present only on routing terminals.
    pub route_target: Option<String>,
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Optional guard label, doubling as the user-facing choice label.
    pub when: Option<String>,
}

/// An immutable, validated interview graph.
///
/// Outgoing edges are indexed per node at load time, preserving authored
/// order; that order is significant and is exactly the order choices are
/// presented in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph {
    start: String,
    nodes: AHashMap<String, Node>,
    outgoing: AHashMap<String, Vec<Edge>>,
}

impl Graph {
    /// Validates an authored document and builds the graph.
    ///
    /// Fails closed: any structural violation returns a [`LoadError`] and no
    /// partially usable graph is produced. Checks performed:
    ///
    /// * the start id exists in the node set,
    /// * every edge's source and destination exist,
    /// * every node with zero outgoing edges is of kind `terminal` or `end`,
    /// * a route target appears only on `terminal` nodes.
    pub fn load(document: FlowDocument) -> Result<Self, LoadError> {
        let FlowDocument {
            start,
            nodes: definitions,
            edges,
        } = document;

        if !definitions.contains_key(&start) {
            return Err(LoadError::StartNodeMissing { start_id: start });
        }

        let mut nodes: AHashMap<String, Node> = AHashMap::with_capacity(definitions.len());
        for (id, definition) in definitions {
            if let Some(target) = &definition.route_target {
                if definition.kind != NodeKind::Terminal {
                    return Err(LoadError::RouteOnNonTerminal {
                        node_id: id,
                        target: target.clone(),
                        kind: definition.kind.to_string(),
                    });
                }
            }
            nodes.insert(
                id.clone(),
                Node {
                    id,
                    text: definition.text,
                    kind: definition.kind,
                    route_target: definition.route_target,
                },
            );
        }

        // Group edges by source, keeping authored order within each node.
        let mut outgoing: AHashMap<String, Vec<Edge>> = AHashMap::new();
        for definition in edges {
            if !nodes.contains_key(&definition.from) {
                return Err(LoadError::UnknownEdgeSource {
                    from: definition.from,
                    to: definition.to,
                });
            }
            if !nodes.contains_key(&definition.to) {
                return Err(LoadError::UnknownEdgeDestination {
                    from: definition.from,
                    to: definition.to,
                });
            }
            outgoing.entry(definition.from.clone()).or_default().push(Edge {
                from: definition.from,
                to: definition.to,
                when: definition.when,
            });
        }

        for node in nodes.values() {
            let is_leaf = outgoing.get(&node.id).is_none_or(|edges| edges.is_empty());
            if is_leaf && !matches!(node.kind, NodeKind::Terminal | NodeKind::End) {
                return Err(LoadError::LeafNotTerminal {
                    node_id: node.id.clone(),
                    kind: node.kind.to_string(),
                });
            }
        }

        Ok(Self {
            start,
            nodes,
            outgoing,
        })
    }

    /// Parses a JSON graph document and loads it.
    ///
    /// This is the front door for the canonical wire format
    /// (`{ start, nodes, edges }`).
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let document: FlowDocument =
            serde_json::from_str(json).map_err(|e| LoadError::JsonParseError(e.to_string()))?;
        Self::load(document)
    }

    /// The designated start node id.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// The outgoing edges of a node, in authored order.
    ///
    /// Returns an empty slice for terminal nodes and for ids not present in
    /// the graph; callers that need to distinguish the two check [`Graph::node`].
    pub fn outgoing(&self, id: &str) -> &[Edge] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Saves the validated graph to a file as a bincode artifact.
    ///
    /// Lets hosts ship precompiled interview scripts and skip JSON parsing
    /// and validation at startup.
    pub fn save(&self, path: &str) -> Result<(), LoadError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| LoadError::ArtifactError(format!("Serialization failed: {}", e)))?;
        let mut file = fs::File::create(path).map_err(|e| {
            LoadError::ArtifactError(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            LoadError::ArtifactError(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads a precompiled graph artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let mut file = fs::File::open(path).map_err(|e| {
            LoadError::ArtifactError(format!("Could not open file '{}': {}", path, e))
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            LoadError::ArtifactError(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a precompiled graph artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        decode_from_slice(bytes, standard())
            .map(|(graph, _)| graph) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| LoadError::ArtifactError(format!("Deserialization failed: {}", e)))
    }
}
