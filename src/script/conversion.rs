use super::definition::FlowDocument;
use crate::error::DocumentConversionError;

/// A trait for custom authoring formats that can be converted into an `annai`
/// [`FlowDocument`].
///
/// This is the primary extension point for making `annai` format-agnostic. An
/// interview script may be authored in whatever structure a CMS or form
/// builder emits; implementing this trait on the parsed representation
/// provides the translation layer the graph loader consumes.
///
/// # Example
///
/// ```rust,no_run
/// use annai::prelude::*;
/// use annai::error::DocumentConversionError;
/// use ahash::AHashMap;
///
/// // 1. Define your custom structs for parsing your format.
/// struct CmsStep { slug: String, prompt: String, choices: Vec<(String, String)> }
/// struct CmsScript { first: String, steps: Vec<CmsStep> }
///
/// // 2. Implement `IntoFlowDocument` for your top-level struct.
/// impl IntoFlowDocument for CmsScript {
///     fn into_flow_document(self) -> Result<FlowDocument, DocumentConversionError> {
///         let mut nodes = AHashMap::new();
///         let mut edges = Vec::new();
///         for step in self.steps {
///             let kind = if step.choices.is_empty() {
///                 NodeKind::Terminal
///             } else {
///                 NodeKind::Decision
///             };
///             for (label, destination) in step.choices {
///                 edges.push(EdgeDefinition {
///                     from: step.slug.clone(),
///                     to: destination,
///                     when: Some(label),
///                 });
///             }
///             nodes.insert(
///                 step.slug,
///                 NodeDefinition { text: step.prompt, kind, route_target: None },
///             );
///         }
///         Ok(FlowDocument { start: self.first, nodes, edges })
///     }
/// }
/// ```
pub trait IntoFlowDocument {
    /// Consumes the object and converts it into an `annai`-compatible
    /// interview document.
    fn into_flow_document(self) -> Result<FlowDocument, DocumentConversionError>;
}
