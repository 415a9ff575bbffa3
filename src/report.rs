use crate::completion::CompletionPayload;
use crate::graph::Graph;
use itertools::Itertools;

/// Formats completion payloads into human-readable summaries
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Format a completion payload into a multi-line summary: visited steps,
    /// recorded answers, recognized forms.
    ///
    /// Answers are printed in history order, so output is deterministic.
    pub fn format_payload(payload: &CompletionPayload, graph: &Graph) -> String {
        let mut out = String::new();

        out.push_str(&format!("Interview completed in {} step(s)\n", payload.history.len()));
        for (position, node_id) in payload.history.iter().enumerate() {
            let text = graph
                .node(node_id)
                .map(|node| Self::condense(&node.text))
                .unwrap_or_default();
            out.push_str(&format!("  {}. [{}] {}\n", position + 1, node_id, text));
        }

        let answered: Vec<&String> = payload
            .history
            .iter()
            .filter(|node_id| payload.answers.contains_key(*node_id))
            .unique()
            .collect();
        if !answered.is_empty() {
            out.push_str("Answers:\n");
            for node_id in answered {
                if let Some(value) = payload.answers.get(node_id) {
                    out.push_str(&format!("  {} = {}\n", node_id, value));
                }
            }
        }

        if payload.artifacts.is_empty() {
            out.push_str("No forms recognized\n");
        } else {
            out.push_str(&format!("Forms: {}\n", payload.artifacts.join(", ")));
        }

        out
    }

    /// Collapse whitespace and cap the length so one step fits on one line.
    fn condense(text: &str) -> String {
        let collapsed: String = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.len() > 72 {
            let cut: String = collapsed.chars().take(69).collect();
            format!("{}...", cut)
        } else {
            collapsed
        }
    }
}
