//! Common test utilities for building interview graph documents.
use annai::prelude::*;
use ahash::AHashMap;

/// Shorthand for a node definition.
#[allow(dead_code)]
pub fn node(text: &str, kind: NodeKind) -> NodeDefinition {
    NodeDefinition {
        text: text.to_string(),
        kind,
        route_target: None,
    }
}

/// Shorthand for a routing-terminal node definition.
#[allow(dead_code)]
pub fn routing_node(text: &str, target: &str) -> NodeDefinition {
    NodeDefinition {
        text: text.to_string(),
        kind: NodeKind::Terminal,
        route_target: Some(target.to_string()),
    }
}

/// Shorthand for an edge definition.
#[allow(dead_code)]
pub fn edge(from: &str, to: &str, when: Option<&str>) -> EdgeDefinition {
    EdgeDefinition {
        from: from.to_string(),
        to: to.to_string(),
        when: when.map(str::to_string),
    }
}

/// Assembles a document from parts.
#[allow(dead_code)]
pub fn document(
    start: &str,
    nodes: Vec<(&str, NodeDefinition)>,
    edges: Vec<EdgeDefinition>,
) -> FlowDocument {
    let mut node_map = AHashMap::new();
    for (id, definition) in nodes {
        node_map.insert(id.to_string(), definition);
    }
    FlowDocument {
        start: start.to_string(),
        nodes: node_map,
        edges,
    }
}

/// The minimal safety-triage interview:
///
/// `safe` ("Are you safe?") branches "no" -> `emergency` and "yes" -> `forms`
/// ("Continue with DV-100 form"), both terminal.
#[allow(dead_code)]
pub fn safety_triage_graph() -> Graph {
    let doc = document(
        "safe",
        vec![
            ("safe", node("Are you safe?", NodeKind::Decision)),
            ("emergency", node("Emergency", NodeKind::Terminal)),
            ("forms", node("Continue with DV-100 form", NodeKind::Terminal)),
        ],
        vec![
            edge("safe", "emergency", Some("no")),
            edge("safe", "forms", Some("yes")),
        ],
    );
    Graph::load(doc).expect("safety triage graph should load")
}

/// A chain of pass-through notices:
///
/// `welcome` (informational) -> `notice` (informational) -> `ask` (decision)
/// -> `done` / `help`, with the first two hops unguarded so both auto-advance.
#[allow(dead_code)]
pub fn notice_chain_graph() -> Graph {
    let doc = document(
        "welcome",
        vec![
            ("welcome", node("Welcome to the intake.", NodeKind::Informational)),
            (
                "notice",
                node("Everything you enter stays private.", NodeKind::Informational),
            ),
            ("ask", node("Do you want to continue?", NodeKind::Decision)),
            ("done", node("Thank you.", NodeKind::End)),
            ("help", node("A staff member will assist you.", NodeKind::Terminal)),
        ],
        vec![
            edge("welcome", "notice", None),
            edge("notice", "ask", None),
            edge("ask", "done", Some("yes")),
            edge("ask", "help", Some("no")),
        ],
    );
    Graph::load(doc).expect("notice chain graph should load")
}

/// A menu with an informational run inside it:
///
/// `hub` fans out to a real choice, two consecutive informational panels, and
/// a second real choice, in that authored order.
#[allow(dead_code)]
pub fn panel_menu_graph() -> Graph {
    let doc = document(
        "hub",
        vec![
            ("hub", node("How would you like to proceed?", NodeKind::Decision)),
            ("file_now", node("Start filing CH-100 today", NodeKind::Terminal)),
            (
                "fee_notice",
                node("Filing carries no fee for protective orders.", NodeKind::Informational),
            ),
            (
                "service_notice",
                node("The sheriff serves papers at no cost.", NodeKind::Informational),
            ),
            ("staff", node("Talk to court staff", NodeKind::Terminal)),
            ("wrapup", node("You are all set.", NodeKind::End)),
        ],
        vec![
            edge("hub", "file_now", Some("File now")),
            edge("hub", "fee_notice", None),
            edge("hub", "service_notice", None),
            edge("hub", "staff", Some("Talk to staff")),
            edge("fee_notice", "wrapup", None),
            edge("service_notice", "wrapup", None),
        ],
    );
    Graph::load(doc).expect("panel menu graph should load")
}

/// A flow ending in a routing terminal:
///
/// `triage` branches to a normal end or to `dvro_route`, a terminal carrying
/// `routeTarget: "/dvro"`.
#[allow(dead_code)]
pub fn routing_graph() -> Graph {
    let doc = document(
        "triage",
        vec![
            ("triage", node("What do you need?", NodeKind::Decision)),
            ("wrap", node("We can finish here.", NodeKind::End)),
            (
                "dvro_route",
                routing_node("You need a restraining order interview.", "/dvro"),
            ),
        ],
        vec![
            edge("triage", "wrap", Some("general help")),
            edge("triage", "dvro_route", Some("restraining order")),
        ],
    );
    Graph::load(doc).expect("routing graph should load")
}

/// A longer interview with revisitable branches and several form mentions:
///
/// `kids` loops back to `overview` so history can contain duplicates, and the
/// node texts mention FL-100 (twice), FL-105, and FL-300 for extraction tests.
#[allow(dead_code)]
pub fn divorce_graph() -> Graph {
    let doc = document(
        "overview",
        vec![
            (
                "overview",
                node("Divorce starts with form FL-100.", NodeKind::Decision),
            ),
            (
                "kids",
                node("With children, add FL-105 to your FL-100 packet.", NodeKind::Decision),
            ),
            (
                "support",
                node("Request support with FL-300.", NodeKind::Terminal),
            ),
            ("file", node("File your packet with the clerk.", NodeKind::End)),
        ],
        vec![
            edge("overview", "kids", Some("we have children")),
            edge("overview", "file", Some("no children")),
            edge("kids", "support", Some("need support order")),
            edge("kids", "overview", Some("start over")),
        ],
    );
    Graph::load(doc).expect("divorce graph should load")
}
