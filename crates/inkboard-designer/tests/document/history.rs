//! Undo/redo of created shapes.

use inkboard_core::{Point, ShapeId};
use inkboard_designer::{Editor, PointerButton, ShapeKind, ShapeTool};
use inkboard_settings::{EditorConfig, IdStrategy};

fn draw_rectangle(editor: &mut Editor, from: (f64, f64), to: (f64, f64)) {
    editor
        .pointer_down(Point::new(from.0, from.1), PointerButton::Primary)
        .unwrap();
    editor.pointer_move(Point::new(to.0, to.1)).unwrap();
    editor.pointer_up().unwrap();
}

fn editor() -> Editor {
    let mut config = EditorConfig::default();
    config.editor.id_strategy = IdStrategy::Sequential;
    config.editor.default_tool = "rectangle".to_string();
    Editor::new(&config).unwrap()
}

#[test]
fn test_undo_removes_and_redo_restores_final_geometry() {
    let mut editor = editor();
    draw_rectangle(&mut editor, (0.0, 0.0), (20.0, 10.0));

    assert!(editor.undo().unwrap());
    assert_eq!(editor.document.shape_count(), 0);
    assert!(editor.document.can_redo());

    assert!(editor.redo().unwrap());
    let shape = editor.document.shape(&ShapeId::new("shape1")).unwrap();
    assert_eq!(
        shape.kind,
        ShapeKind::Rectangle {
            size: Point::new(20.0, 10.0)
        }
    );
}

#[test]
fn test_undo_with_empty_history_reports_nothing() {
    let mut editor = editor();
    assert!(!editor.undo().unwrap());
    assert!(!editor.redo().unwrap());
}

#[test]
fn test_new_shape_clears_redo() {
    let mut editor = editor();
    draw_rectangle(&mut editor, (0.0, 0.0), (5.0, 5.0));
    editor.undo().unwrap();

    editor.select_tool(ShapeTool::Ellipse).unwrap();
    draw_rectangle(&mut editor, (1.0, 1.0), (3.0, 3.0));

    assert!(!editor.document.can_redo());
    assert_eq!(editor.document.shape_count(), 1);
}

#[test]
fn test_undo_refused_during_session() {
    let mut editor = editor();
    draw_rectangle(&mut editor, (0.0, 0.0), (5.0, 5.0));
    editor
        .pointer_down(Point::new(9.0, 9.0), PointerButton::Primary)
        .unwrap();

    let err = editor.undo().unwrap_err();
    assert!(err.is_session_error());
    assert_eq!(editor.document.shape_count(), 2);
}

#[test]
fn test_undo_steps_back_one_shape_at_a_time() {
    let mut editor = editor();
    for i in 0..3 {
        let offset = i as f64 * 10.0;
        draw_rectangle(&mut editor, (offset, 0.0), (offset + 5.0, 5.0));
    }

    editor.undo().unwrap();
    assert_eq!(editor.document.shape_count(), 2);
    assert!(editor.document.shape(&ShapeId::new("shape3")).is_none());

    editor.undo().unwrap();
    editor.redo().unwrap();
    assert!(editor.document.shape(&ShapeId::new("shape2")).is_some());
}
