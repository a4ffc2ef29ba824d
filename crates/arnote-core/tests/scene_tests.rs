//! Integration tests for the anchor scene graph state machine.
//!
//! Covers the subtree invariants: one live panel matching the selection,
//! three freshly styled buttons, wholesale rebuild on every transition.

use arnote_core::render::geometry::PANEL_MARGIN_M;
use arnote_core::render::style;
use arnote_core::scene::content::content_for;
use arnote_core::scene::{AnchorSceneGraph, MarkerSize, PaneState, SceneError};
use glam::Mat4;

const SIZE: MarkerSize = MarkerSize {
    width: 0.1,
    height: 0.08,
};

fn attached_graph() -> AnchorSceneGraph {
    let mut graph = AnchorSceneGraph::new();
    graph.attach_anchor(Mat4::IDENTITY, SIZE);
    graph
}

/// Assert the subtree invariants for a given selection: panel content
/// matches, exactly one button is active, and it carries the selected tag.
fn assert_selected(graph: &AnchorSceneGraph, expected: PaneState) {
    assert_eq!(graph.current_state(), expected);

    let subtree = graph.subtree().expect("subtree should be attached");
    assert_eq!(subtree.panel().state, expected);
    assert_eq!(subtree.panel().surface.text, content_for(expected).body);

    let active: Vec<PaneState> = subtree
        .buttons()
        .iter()
        .filter(|b| b.active)
        .map(|b| b.state)
        .collect();
    assert_eq!(active, vec![expected], "exactly one button should be active");
}

mod attach_tests {
    use super::*;

    #[test]
    fn initial_state_is_details() {
        let graph = attached_graph();
        assert_selected(&graph, PaneState::Details);
    }

    #[test]
    fn initial_panel_shows_ticket_fields() {
        let graph = attached_graph();
        let panel = graph.subtree().unwrap().panel();
        assert!(panel.surface.text.contains("Type: BUG"));
        assert!(panel.surface.text.contains("Priority: Highest"));
    }

    #[test]
    fn panel_sits_below_marker_by_height_plus_margin() {
        let graph = attached_graph();
        let quad = graph.subtree().unwrap().panel().surface.quad;
        let expected_y = -(SIZE.height + PANEL_MARGIN_M);
        assert!(
            (quad.center.y - expected_y).abs() < 1e-6,
            "panel center y: {} vs {}",
            quad.center.y,
            expected_y
        );
        assert!((quad.half_width - SIZE.width * 0.5).abs() < 1e-6);
        assert!((quad.half_height - SIZE.height * 0.5).abs() < 1e-6);
    }

    #[test]
    fn three_buttons_in_slot_order() {
        let graph = attached_graph();
        let states: Vec<PaneState> = graph
            .subtree()
            .unwrap()
            .buttons()
            .iter()
            .map(|b| b.state)
            .collect();
        assert_eq!(states, PaneState::ALL.to_vec());
    }

    #[test]
    fn buttons_sit_on_distinct_slots() {
        let graph = attached_graph();
        let subtree = graph.subtree().unwrap();
        let mut xs: Vec<f32> = subtree
            .buttons()
            .iter()
            .map(|b| b.surface.quad.center.x)
            .collect();
        xs.dedup();
        assert_eq!(xs.len(), 3, "button slots should not overlap: {:?}", xs);
    }

    #[test]
    fn reattach_resets_to_details() {
        let mut graph = attached_graph();
        graph.handle_selection(PaneState::Time).unwrap();
        assert!(graph.detach());
        graph.attach_anchor(Mat4::IDENTITY, SIZE);
        assert_selected(&graph, PaneState::Details);
    }
}

mod selection_tests {
    use super::*;

    #[test]
    fn single_active_pane_after_every_selection() {
        let mut graph = attached_graph();
        let sequence = [
            PaneState::Description,
            PaneState::Time,
            PaneState::Time,
            PaneState::Details,
            PaneState::Description,
        ];
        for state in sequence {
            graph.handle_selection(state).unwrap();
            assert_selected(&graph, state);
        }
    }

    #[test]
    fn active_button_styling_is_black_on_sticky() {
        let mut graph = attached_graph();
        graph.handle_selection(PaneState::Description).unwrap();

        for button in graph.subtree().unwrap().buttons() {
            let expected = style::button_style(button.state == PaneState::Description);
            assert_eq!(button.surface.style, expected, "state {:?}", button.state);
        }

        let active = &graph.subtree().unwrap().buttons()[1];
        assert_eq!(active.surface.style.background, style::STICKY);
        assert_eq!(active.surface.style.border, style::BLACK);
        assert_eq!(active.surface.style.text_color, style::BLACK);
    }

    #[test]
    fn inactive_button_styling_is_sticky_on_black() {
        let graph = attached_graph();
        // Details is active, so Description and Time are inactive.
        for button in &graph.subtree().unwrap().buttons()[1..] {
            assert_eq!(button.surface.style.background, style::BLACK);
            assert_eq!(button.surface.style.border, style::STICKY);
            assert_eq!(button.surface.style.text_color, style::STICKY);
        }
    }

    #[test]
    fn idempotent_reselection_yields_identical_subtree() {
        let mut graph = attached_graph();
        graph.handle_selection(PaneState::Time).unwrap();
        let first = graph.subtree().unwrap().clone();
        graph.handle_selection(PaneState::Time).unwrap();
        let second = graph.subtree().unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn every_transition_pair_succeeds() {
        for from in PaneState::ALL {
            for to in PaneState::ALL {
                if from == to {
                    continue;
                }
                let mut graph = attached_graph();
                graph.handle_selection(from).unwrap();
                graph.handle_selection(to).unwrap();
                assert_selected(&graph, to);
            }
        }
    }

    #[test]
    fn selection_without_anchor_is_rejected() {
        let mut graph = AnchorSceneGraph::new();
        assert_eq!(
            graph.handle_selection(PaneState::Time),
            Err(SceneError::NoAnchor)
        );
    }

    #[test]
    fn panel_offset_survives_selection_changes() {
        // The panel is repositioned from the unchanged physical size on
        // every rebuild, so its quad must not drift across transitions.
        let mut graph = attached_graph();
        let before = graph.subtree().unwrap().panel().surface.quad;
        graph.handle_selection(PaneState::Description).unwrap();
        let after = graph.subtree().unwrap().panel().surface.quad;
        assert_eq!(before, after);
    }
}

mod detach_tests {
    use super::*;

    #[test]
    fn detach_removes_subtree() {
        let mut graph = attached_graph();
        assert!(graph.detach());
        assert!(graph.subtree().is_none());
    }

    #[test]
    fn detach_twice_reports_false() {
        let mut graph = attached_graph();
        assert!(graph.detach());
        assert!(!graph.detach());
    }

    #[test]
    fn pose_update_after_detach_is_ignored() {
        let mut graph = attached_graph();
        graph.detach();
        let moved = Mat4::from_translation(glam::Vec3::new(0.1, 0.0, 0.0));
        assert!(!graph.update_pose(moved));
    }

    #[test]
    fn pose_update_while_attached_is_applied() {
        let mut graph = attached_graph();
        let moved = Mat4::from_translation(glam::Vec3::new(0.1, 0.0, 0.0));
        assert!(graph.update_pose(moved));
        assert_eq!(graph.subtree().unwrap().pose(), moved);
    }
}
