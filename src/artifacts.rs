//! Extraction of form identifiers and recorded answers from a traversal.
//!
//! Court form identifiers follow a fixed lexical pattern (two or three
//! uppercase letters, a hyphen, three or four digits: `DV-100`, `CH-109`,
//! `FL-300`). The scan is a textual heuristic over authored content and is
//! deliberately kept that way; it runs as one compiled pattern over the
//! concatenated history text, never per node.

use crate::graph::Graph;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use regex::Regex;
use std::sync::OnceLock;

const FORM_ID_PATTERN: &str = r"\b[A-Z]{2,3}-[0-9]{3,4}\b";

static FORM_ID: OnceLock<Regex> = OnceLock::new();

fn form_id_regex() -> &'static Regex {
    // The pattern is a checked constant, so construction cannot fail.
    FORM_ID.get_or_init(|| Regex::new(FORM_ID_PATTERN).unwrap())
}

/// Everything extracted from one traversal: recognized form identifiers plus
/// the recorded answers, finalized for the completion payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtifactSet {
    /// Unique form identifiers, ordered by first appearance in history.
    pub forms: Vec<String>,
    /// Recorded answers for nodes present in history, keyed by node id.
    pub answers: AHashMap<String, String>,
}

/// Scans the display text of every node in `history` for form identifiers and
/// merges the answers recorded during traversal.
///
/// Pure function of its inputs: idempotent, and the `forms` list preserves
/// first-appearance order with first-occurrence-wins de-duplication. Answers
/// for nodes no longer in history (abandoned branches) are dropped.
pub fn extract(
    graph: &Graph,
    history: &[String],
    answers: &AHashMap<String, String>,
) -> ArtifactSet {
    let combined = history
        .iter()
        .filter_map(|id| graph.node(id))
        .map(|node| node.text.as_str())
        .join("\n");

    let forms = form_id_regex()
        .find_iter(&combined)
        .map(|m| m.as_str())
        .unique()
        .map(str::to_string)
        .collect();

    let visited: AHashSet<&str> = history.iter().map(String::as_str).collect();
    let answers = answers
        .iter()
        .filter(|(node_id, _)| visited.contains(node_id.as_str()))
        .map(|(node_id, value)| (node_id.clone(), value.clone()))
        .collect();

    ArtifactSet { forms, answers }
}
