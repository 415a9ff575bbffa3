//! Presentation tests: how nodes are rendered, and in what order.
mod common;
use common::*;
use annai::prelude::*;

#[test]
fn two_way_decision_is_a_menu_in_authored_order() {
    let graph = safety_triage_graph();
    let presentation = resolve(&graph, "safe").expect("resolve start");

    let Presentation::Menu(items) = presentation else {
        panic!("expected a menu, got {:?}", presentation);
    };
    assert_eq!(items.len(), 2);
    match (&items[0], &items[1]) {
        (
            MenuItem::Button { label: first, choice: c0 },
            MenuItem::Button { label: second, choice: c1 },
        ) => {
            assert_eq!(*first, "no");
            assert_eq!(*second, "yes");
            assert_eq!(c0.edge.to, "emergency");
            assert_eq!(c1.edge.to, "forms");
        }
        other => panic!("expected two buttons, got {:?}", other),
    }
}

#[test]
fn terminal_node_is_exhausted() {
    let graph = safety_triage_graph();
    assert_eq!(
        resolve(&graph, "forms").expect("resolve"),
        Presentation::Exhausted
    );
}

#[test]
fn unguarded_edge_out_of_informational_auto_advances() {
    let graph = notice_chain_graph();
    match resolve(&graph, "welcome").expect("resolve") {
        Presentation::AutoAdvance(choice) => assert_eq!(choice.edge.to, "notice"),
        other => panic!("expected auto-advance, got {:?}", other),
    }
}

#[test]
fn single_edge_out_of_decision_is_a_continue_prompt() {
    // Same shape as the auto-advance case, but the source is a decision
    // node, so the user still has to act.
    let doc = document(
        "confirm",
        vec![
            ("confirm", node("Ready to submit?", NodeKind::Decision)),
            ("done", node("Submitted.", NodeKind::End)),
        ],
        vec![edge("confirm", "done", None)],
    );
    let graph = Graph::load(doc).expect("load");
    match resolve(&graph, "confirm").expect("resolve") {
        Presentation::SingleContinue(choice) => assert_eq!(choice.edge.to, "done"),
        other => panic!("expected single continue, got {:?}", other),
    }
}

#[test]
fn guarded_single_edge_never_auto_advances() {
    let doc = document(
        "note",
        vec![
            ("note", node("Read this first.", NodeKind::Informational)),
            ("done", node("Done.", NodeKind::End)),
        ],
        vec![edge("note", "done", Some("I have read it"))],
    );
    let graph = Graph::load(doc).expect("load");
    assert!(matches!(
        resolve(&graph, "note").expect("resolve"),
        Presentation::SingleContinue(_)
    ));
}

#[test]
fn informational_destinations_render_as_panels() {
    let graph = panel_menu_graph();
    let Presentation::Menu(items) = resolve(&graph, "hub").expect("resolve") else {
        panic!("expected a menu");
    };
    assert_eq!(items.len(), 4);

    assert!(matches!(items[0], MenuItem::Button { label: "File now", .. }));
    // First panel of the run stays a plain panel; the run's final panel
    // carries the continue action.
    assert!(matches!(items[1], MenuItem::Panel { .. }));
    assert!(matches!(items[2], MenuItem::PanelContinue { .. }));
    assert!(matches!(items[3], MenuItem::Button { label: "Talk to staff", .. }));

    // Panel indices still map back to the authored edge positions.
    assert_eq!(items[1].choice().index, 1);
    assert_eq!(items[2].choice().index, 2);
}

#[test]
fn lone_informational_destination_is_a_panel_with_continue() {
    let doc = document(
        "hub",
        vec![
            ("hub", node("Choose.", NodeKind::Decision)),
            ("go", node("Proceed", NodeKind::Terminal)),
            ("why", node("Here is some background.", NodeKind::Informational)),
            ("end", node("Bye.", NodeKind::End)),
        ],
        vec![
            edge("hub", "go", Some("proceed")),
            edge("hub", "why", None),
            edge("why", "end", None),
        ],
    );
    let graph = Graph::load(doc).expect("load");
    let Presentation::Menu(items) = resolve(&graph, "hub").expect("resolve") else {
        panic!("expected a menu");
    };
    assert!(matches!(items[1], MenuItem::PanelContinue { .. }));
}

#[test]
fn button_label_falls_back_to_destination_text() {
    let doc = document(
        "pick",
        vec![
            ("pick", node("Pick a path.", NodeKind::Decision)),
            ("a", node("Path A", NodeKind::Terminal)),
            ("b", node("Path B", NodeKind::Terminal)),
        ],
        vec![edge("pick", "a", None), edge("pick", "b", Some("take B"))],
    );
    let graph = Graph::load(doc).expect("load");
    let Presentation::Menu(items) = resolve(&graph, "pick").expect("resolve") else {
        panic!("expected a menu");
    };
    assert!(matches!(items[0], MenuItem::Button { label: "Path A", .. }));
    assert!(matches!(items[1], MenuItem::Button { label: "take B", .. }));
}

#[test]
fn unknown_node_is_a_hard_error() {
    let graph = safety_triage_graph();
    let err = resolve(&graph, "missing").unwrap_err();
    assert_eq!(
        err,
        TraversalError::UnknownNode {
            node_id: "missing".to_string()
        }
    );
}
