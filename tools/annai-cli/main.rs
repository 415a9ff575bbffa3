use annai::prelude::*;
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match a simple authoring export format and are only used here
// for conversion. The canonical `{ start, nodes, edges }` format is handled
// directly by `Graph::from_json`.

#[derive(Deserialize)]
struct RawScript {
    #[serde(alias = "startStep")]
    start: String,
    steps: Vec<RawStep>,
}

#[derive(Deserialize)]
struct RawStep {
    id: String,
    #[serde(alias = "prompt")]
    text: String,
    #[serde(alias = "stepType")]
    kind: String,
    #[serde(default, alias = "routeTarget")]
    route_target: Option<String>,
    #[serde(default)]
    next: Vec<RawChoice>,
}

#[derive(Deserialize)]
struct RawChoice {
    to: String,
    #[serde(default, alias = "label")]
    when: Option<String>,
}

// --- Converter Implementation ---
// Converts the raw authoring export into annai's canonical FlowDocument.

impl IntoFlowDocument for RawScript {
    fn into_flow_document(self) -> Result<FlowDocument, annai::error::DocumentConversionError> {
        use annai::error::DocumentConversionError;
        let mut document = FlowDocument {
            start: self.start,
            ..Default::default()
        };
        for step in self.steps {
            let kind = match step.kind.as_str() {
                "decision" => NodeKind::Decision,
                "informational" => NodeKind::Informational,
                "terminal" => NodeKind::Terminal,
                "end" => NodeKind::End,
                other => {
                    return Err(DocumentConversionError::ValidationError(format!(
                        "step '{}' has unknown type '{}'",
                        step.id, other
                    )));
                }
            };
            for choice in step.next {
                document.edges.push(EdgeDefinition {
                    from: step.id.clone(),
                    to: choice.to,
                    when: choice.when,
                });
            }
            document.nodes.insert(
                step.id,
                NodeDefinition {
                    text: step.text,
                    kind,
                    route_target: step.route_target,
                },
            );
        }
        Ok(document)
    }
}

/// A guided decision-graph interview runner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the interview graph JSON file
    script_path: String,

    /// Treat the input as a raw authoring export instead of the canonical format
    #[arg(short, long)]
    raw: bool,

    /// Validate and print graph statistics, then exit without running
    #[arg(short, long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();

    let script_json = fs::read_to_string(&cli.script_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read script file '{}': {}",
            &cli.script_path, e
        ))
    });

    let graph = if cli.raw {
        let raw: RawScript = serde_json::from_str(&script_json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse script JSON: {}", e)));
        let document = raw
            .into_flow_document()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert script: {}", e)));
        Graph::load(document)
    } else {
        Graph::from_json(&script_json)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Malformed graph: {}", e)));

    if cli.check {
        println!(
            "Graph OK: {} node(s), start node '{}'",
            graph.node_count(),
            graph.start()
        );
        return;
    }

    run_interview(graph);
}

/// Drives one interview on stdin/stdout until completion, routing, or quit.
fn run_interview(graph: Graph) {
    let mut session = FlowSession::builder(graph)
        .on_route(|target, last| {
            println!("\n>>> Transferring to '{}' (from step '{}')", target, last);
        })
        .build();

    println!("--- Annai Interview ---");
    println!("Commands: number = choose, Enter = continue, b = back, q = quit\n");

    loop {
        if let Err(e) = session.settle() {
            exit_with_error(&format!("Traversal failed: {}", e));
        }

        if session.route().is_some() {
            // A routing terminal is a hard exit; no completion payload.
            return;
        }

        let node_text = session
            .graph()
            .node(session.current())
            .map(|node| node.text.clone())
            .unwrap_or_default();
        println!("\n{}", node_text);

        let action = match session.present() {
            Ok(Presentation::Exhausted) => None,
            Ok(Presentation::AutoAdvance(choice)) | Ok(Presentation::SingleContinue(choice)) => {
                println!("  [Enter] continue");
                Some(vec![choice.index])
            }
            Ok(Presentation::Menu(items)) => {
                let mut selectable = Vec::new();
                for item in &items {
                    match item {
                        MenuItem::Button { choice, label } => {
                            selectable.push(choice.index);
                            println!("  [{}] {}", selectable.len(), label);
                        }
                        MenuItem::Panel { text, .. } => {
                            println!("  | {}", text);
                        }
                        MenuItem::PanelContinue { choice, text } => {
                            println!("  | {}", text);
                            selectable.push(choice.index);
                            println!("  [{}] continue", selectable.len());
                        }
                    }
                }
                Some(selectable)
            }
            Err(e) => exit_with_error(&format!("Presentation failed: {}", e)),
        };

        let Some(selectable) = action else {
            // Terminal node: assemble and print the summary.
            let payload = match session.finish() {
                Ok(payload) => payload.clone(),
                Err(e) => exit_with_error(&format!("Completion failed: {}", e)),
            };
            let summary = SummaryFormatter::format_payload(&payload, session.graph());
            println!("\n{}", summary);
            return;
        };

        match prompt_for_input("Your choice") {
            input if input.eq_ignore_ascii_case("q") => {
                println!("Leaving the interview.");
                return;
            }
            input if input.eq_ignore_ascii_case("b") => match session.retreat() {
                Retreat::Moved => {}
                Retreat::AtStart => println!("Already at the first step."),
            },
            input if input.is_empty() && selectable.len() == 1 => {
                if let Err(e) = session.advance(selectable[0]) {
                    println!("{}", e);
                }
            }
            input => match input.parse::<usize>() {
                Ok(n) if n >= 1 && n <= selectable.len() => {
                    if let Err(e) = session.advance(selectable[n - 1]) {
                        println!("{}", e);
                    }
                }
                _ => println!("Invalid choice. Enter a number between 1 and {}.", selectable.len()),
            },
        }
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();
    print!("> {}: ", prompt_text);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
