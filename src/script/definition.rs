use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a node, governing presentation and termination behavior.
///
/// The kind is resolved once at load time; the engine never inspects node ids
/// or display text to decide how a node behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A real question: the user picks one of several outgoing edges.
    Decision,
    /// Pass-through content: shown, but not a decision point.
    Informational,
    /// Ends the interview. May carry a route target to hand off to another flow.
    Terminal,
    /// Ends the interview. Never routes.
    End,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Decision => "decision",
            NodeKind::Informational => "informational",
            NodeKind::Terminal => "terminal",
            NodeKind::End => "end",
        };
        f.write_str(name)
    }
}

/// The complete authored definition of one interview flow, ready for loading.
///
/// This is the canonical wire format (`{ start, nodes, edges }`) and the target
/// structure for any custom authoring-format conversion. Node ids are the map
/// keys; edge order is authoring order and is significant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlowDocument {
    pub start: String,
    pub nodes: AHashMap<String, NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

/// Defines a single node (a screen of the interview) in the authored document.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDefinition {
    /// Display text. May embed form-identifier tokens such as `DV-100`.
    pub text: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Present only on routing terminals: the flow/page to transfer to.
    #[serde(default, rename = "routeTarget")]
    pub route_target: Option<String>,
}

/// Defines a directed connection between two nodes in the authored document.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeDefinition {
    pub from: String,
    pub to: String,
    /// Optional guard label, doubling as the user-facing choice label.
    /// Absence means "unconditional continue".
    #[serde(default)]
    pub when: Option<String>,
}
