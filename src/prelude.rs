//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! annai crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use annai::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a graph document and start an interview session
//! let document_json = std::fs::read_to_string("path/to/interview.json")?;
//! let graph = Graph::from_json(&document_json)?;
//!
//! let mut session = FlowSession::new(graph);
//! session.settle()?;
//!
//! match session.present()? {
//!     Presentation::Exhausted => println!("Already at a terminal"),
//!     presentation => println!("First screen: {:?}", presentation),
//! }
//! # Ok(())
//! # }
//! ```

// Graph loading and the validated model
pub use crate::graph::{Edge, Graph, Node};
pub use crate::script::{
    EdgeDefinition, FlowDocument, IntoFlowDocument, NodeDefinition, NodeKind,
};

// Presentation and traversal
pub use crate::resolver::{Choice, MenuItem, Presentation, resolve};
pub use crate::traversal::{Retreat, TraversalController, TraversalState};

// Terminal handling
pub use crate::artifacts::{ArtifactSet, extract};
pub use crate::completion::{CompletionAssembler, CompletionPayload};
pub use crate::session::{FlowSession, FlowSessionBuilder};

// Error types
pub use crate::error::{CompletionError, LoadError, TraversalError};

// Summary formatting
pub use crate::report::SummaryFormatter;

// Result type alias for convenience. The error type defaults to a boxed
// error but can be overridden, so `Result<T, SomeError>` also reads naturally
// under a glob import.
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
