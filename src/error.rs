use thiserror::Error;

/// Errors that can occur while loading and validating an interview graph.
///
/// Every variant means the authored document is structurally malformed. Loading
/// fails closed: no partially usable `Graph` is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Failed to parse graph document JSON: {0}")]
    JsonParseError(String),

    #[error("Start node '{start_id}' is not present in the node set")]
    StartNodeMissing { start_id: String },

    #[error("Edge from '{from}' to '{to}' references a source id absent from the node set")]
    UnknownEdgeSource { from: String, to: String },

    #[error("Edge from '{from}' to '{to}' references a destination id absent from the node set")]
    UnknownEdgeDestination { from: String, to: String },

    #[error(
        "Node '{node_id}' has no outgoing edges but is of kind '{kind}'; leaves must be 'terminal' or 'end'"
    )]
    LeafNotTerminal { node_id: String, kind: String },

    #[error("Node '{node_id}' carries a route target '{target}' but is of kind '{kind}'")]
    RouteOnNonTerminal {
        node_id: String,
        target: String,
        kind: String,
    },

    #[error("Could not read or write a compiled graph artifact: {0}")]
    ArtifactError(String),
}

/// Errors raised by traversal operations.
///
/// These indicate UI-wiring or programming mistakes in the host. The operation
/// is refused and `TraversalState` is left exactly as it was; nothing is ever
/// silently clamped into range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error(
        "Choice index {index} is out of range for node '{node_id}', which has {available} outgoing edge(s)"
    )]
    InvalidChoice {
        node_id: String,
        index: usize,
        available: usize,
    },

    #[error("Node '{node_id}' was not visited before the current position, cannot jump to it")]
    NotInHistory { node_id: String },

    #[error("Node '{node_id}' does not exist in the loaded graph")]
    UnknownNode { node_id: String },

    #[error(
        "Auto-advance from node '{node_id}' did not reach user input within {limit} step(s); the informational chain loops"
    )]
    AutoAdvanceCycle { node_id: String, limit: usize },
}

/// Errors raised when assembling a completion payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("Node '{node_id}' is not a terminal node; the interview has not finished")]
    NotTerminal { node_id: String },

    #[error(
        "Node '{node_id}' routes to '{target}'; a routing terminal transfers control instead of completing"
    )]
    RoutedTerminal { node_id: String, target: String },
}

/// Errors that can occur when converting a custom authoring format into an
/// `annai` [`FlowDocument`](crate::script::FlowDocument).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentConversionError {
    #[error("Invalid custom document: {0}")]
    ValidationError(String),
}
