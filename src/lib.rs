//! # Annai - Guided Decision-Graph Flow Engine
//!
//! **Annai** drives structured intake interviews authored as declarative
//! directed graphs. Each interview script is a set of nodes (questions,
//! statements, informational notices, terminals) connected by ordered edges
//! with optional guard labels. The engine interprets the graph at runtime: it
//! tracks the current position, keeps a replayable history of visited nodes,
//! decides per node whether to auto-advance, present a single continue
//! action, suppress pass-through informational content, or show a multi-way
//! choice menu, and on reaching a terminal node assembles a structured
//! summary (recognized form identifiers, recorded answers, the full history)
//! for a host-supplied completion handler.
//!
//! The engine guarantees structurally sound traversal of whatever graph it is
//! given; it does not validate the meaning of any script's content.
//!
//! ## Core Workflow
//!
//! 1.  **Load**: parse the authored document (`{ start, nodes, edges }`) with
//!     [`Graph::from_json`], or convert a custom authoring format via the
//!     [`IntoFlowDocument`](script::IntoFlowDocument) trait and call
//!     [`Graph::load`]. Validation fails closed at this point; traversal can
//!     never hit a dangling node.
//! 2.  **Drive**: create a [`FlowSession`](session::FlowSession), ask it to
//!     [`present`](session::FlowSession::present) on every render cycle, and
//!     feed user choices back through
//!     [`advance`](session::FlowSession::advance) /
//!     [`retreat`](session::FlowSession::retreat) /
//!     [`jump_to`](session::FlowSession::jump_to).
//! 3.  **Finish**: at a terminal node, [`finish`](session::FlowSession::finish)
//!     assembles the completion payload and fires the host callback exactly
//!     once; a routing terminal instead hands control to another flow via
//!     [`route`](session::FlowSession::route).
//!
//! ## Quick Start
//!
//! ```rust
//! use annai::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let graph = Graph::from_json(
//!         r#"{
//!             "start": "safe",
//!             "nodes": {
//!                 "safe": { "text": "Are you safe right now?", "type": "decision" },
//!                 "emergency": { "text": "Please call 911.", "type": "terminal" },
//!                 "forms": { "text": "Continue with the DV-100 form.", "type": "terminal" }
//!             },
//!             "edges": [
//!                 { "from": "safe", "to": "emergency", "when": "no" },
//!                 { "from": "safe", "to": "forms", "when": "yes" }
//!             ]
//!         }"#,
//!     )?;
//!
//!     let mut session = FlowSession::builder(graph)
//!         .on_completion(|payload| {
//!             println!("Recognized forms: {:?}", payload.artifacts);
//!         })
//!         .build();
//!
//!     // The start node is a two-way decision.
//!     match session.present()? {
//!         Presentation::Menu(items) => assert_eq!(items.len(), 2),
//!         other => panic!("expected a menu, got {:?}", other),
//!     }
//!
//!     // The user answers "yes" (the second authored edge).
//!     session.advance(1)?;
//!
//!     // The interview is over; assemble the summary.
//!     let payload = session.finish()?;
//!     assert_eq!(payload.artifacts, vec!["DV-100".to_string()]);
//!     assert_eq!(payload.answers.get("safe").map(String::as_str), Some("yes"));
//!     Ok(())
//! }
//! ```

pub mod artifacts;
pub mod completion;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod report;
pub mod resolver;
pub mod routing;
pub mod script;
pub mod session;
pub mod traversal;
