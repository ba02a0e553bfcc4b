//! Property-based invariant tests for the history engine.
//!
//! These tests drive the engine with arbitrary action sequences and verify:
//!
//! 1. The live raster always equals a replay of the current page
//! 2. Undo followed by redo restores both the log and the raster
//! 3. Undo succeeds exactly once per logged stroke, then stops
//! 4. A peer replaying the outbound feed sees the same raster
//! 5. Undo and redo never reach the outbound feed

use proptest::prelude::*;
use sketchpad_config::CanvasConfig;
use sketchpad_painting::{decode_operations, Color, CpuSurface, HistoryEngine, Point, SurfaceRenderer};

const WIDTH: u32 = 32;
const HEIGHT: u32 = 24;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Action {
    Start(f32, f32),
    Move(f32, f32),
    End,
    Style(Color, f32),
    Undo,
    Redo,
    Clear,
}

fn point() -> impl Strategy<Value = (f32, f32)> {
    (-2.0f32..(WIDTH as f32 + 2.0), -2.0f32..(HEIGHT as f32 + 2.0))
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::BLACK),
        Just(Color::rgb(255, 0, 0)),
        Just(Color::rgba(0, 0, 255, 128)),
        Just(Color::WHITE),
    ]
}

fn drawing_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => point().prop_map(|(x, y)| Action::Start(x, y)),
        6 => point().prop_map(|(x, y)| Action::Move(x, y)),
        3 => Just(Action::End),
        1 => (color(), 0.5f32..6.0).prop_map(|(c, w)| Action::Style(c, w)),
        1 => (color(), prop_oneof![Just(0.0f32), Just(-2.0f32), Just(f32::NAN)])
            .prop_map(|(c, w)| Action::Style(c, w)),
        1 => Just(Action::Clear),
    ]
}

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        10 => drawing_action(),
        2 => Just(Action::Undo),
        2 => Just(Action::Redo),
    ]
}

fn engine() -> HistoryEngine<CpuSurface> {
    HistoryEngine::new(CpuSurface::new(WIDTH, HEIGHT), &CanvasConfig::new(WIDTH, HEIGHT))
        .expect("small canvas is always acquirable")
}

fn apply(engine: &mut HistoryEngine<CpuSurface>, actions: &[Action]) {
    for action in actions {
        match *action {
            Action::Start(x, y) => {
                engine.start_stroke(Point::new(x, y));
            }
            Action::Move(x, y) => {
                engine.continue_stroke(Point::new(x, y));
            }
            Action::End => {
                engine.end_stroke();
            }
            Action::Style(color, width) => {
                engine.set_style(color, width);
            }
            Action::Undo => {
                engine.undo();
            }
            Action::Redo => {
                engine.redo();
            }
            Action::Clear => {
                engine.clear();
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn live_raster_matches_replay(actions in prop::collection::vec(any_action(), 0..40)) {
        let mut engine = engine();
        apply(&mut engine, &actions);

        let live = engine.surface().pixels().to_vec();
        engine.redraw();
        prop_assert_eq!(engine.surface().pixels(), live.as_slice());
    }

    #[test]
    fn undo_then_redo_is_identity(actions in prop::collection::vec(any_action(), 0..40)) {
        let mut engine = engine();
        apply(&mut engine, &actions);
        engine.end_stroke();

        let history = engine.history().clone();
        let pixels = engine.surface().pixels().to_vec();

        if engine.undo() {
            prop_assert!(engine.redo());
            prop_assert_eq!(engine.history(), &history);
            prop_assert_eq!(engine.surface().pixels(), pixels.as_slice());
        } else {
            prop_assert!(engine.current_page().is_empty());
            prop_assert_eq!(engine.history().page_count(), 1);
        }
    }

    #[test]
    fn undo_exhausts_after_every_stroke(actions in prop::collection::vec(any_action(), 0..40)) {
        let mut engine = engine();
        apply(&mut engine, &actions);
        engine.end_stroke();

        let history = engine.history().clone();
        let pixels = engine.surface().pixels().to_vec();
        let strokes = history.stroke_count();

        for _ in 0..strokes {
            prop_assert!(engine.undo());
        }
        prop_assert!(!engine.undo());
        prop_assert_eq!(engine.history().page_count(), 1);
        prop_assert!(engine.current_page().is_empty());
        prop_assert!(engine.surface().is_blank());

        for _ in 0..strokes {
            prop_assert!(engine.redo());
        }
        prop_assert_eq!(engine.history(), &history);
        prop_assert_eq!(engine.surface().pixels(), pixels.as_slice());
    }

    #[test]
    fn peer_replaying_outbound_sees_same_raster(actions in prop::collection::vec(drawing_action(), 0..40)) {
        let mut engine = engine();
        apply(&mut engine, &actions);

        let batch = engine.outbound_mut().drain_encoded().expect("operations always encode");
        let ops = decode_operations(&batch).expect("own batch always decodes");

        let config = CanvasConfig::new(WIDTH, HEIGHT);
        let mut peer = SurfaceRenderer::new(CpuSurface::new(WIDTH, HEIGHT), &config)
            .expect("small canvas is always acquirable");
        peer.apply_all(&ops);

        prop_assert_eq!(peer.surface().pixels(), engine.surface().pixels());
    }

    #[test]
    fn undo_and_redo_are_never_sent(
        actions in prop::collection::vec(drawing_action(), 0..30),
        steps in prop::collection::vec(any::<bool>(), 0..20),
    ) {
        let mut engine = engine();
        apply(&mut engine, &actions);
        // Undo concludes an open stroke, which is sent
        engine.end_stroke();
        let committed = engine.outbound().total_committed();
        let pending = engine.outbound().len();

        for undo in steps {
            if undo {
                engine.undo();
            } else {
                engine.redo();
            }
        }

        prop_assert_eq!(engine.outbound().total_committed(), committed);
        prop_assert_eq!(engine.outbound().len(), pending);
    }
}
