//! Every shape tool starts the session its shape needs.

use inkboard_core::Point;
use inkboard_designer::{
    Decoration, Editor, Handle, PointerButton, SessionType, ShapeKind, ShapeTool, ShapeType,
    ToolStatus,
};
use inkboard_settings::{EditorConfig, IdStrategy, TOOL_NAMES};

fn editor_with(tool: ShapeTool) -> Editor {
    let mut config = EditorConfig::default();
    config.editor.id_strategy = IdStrategy::Sequential;
    config.editor.default_tool = tool.name().to_string();
    Editor::new(&config).unwrap()
}

#[test]
fn test_session_table() {
    let expected = [
        (ShapeTool::Line, SessionType::Arrow, Some(Handle::End)),
        (ShapeTool::Arrow, SessionType::Arrow, Some(Handle::End)),
        (ShapeTool::Rectangle, SessionType::TransformSingle, Some(Handle::BottomRight)),
        (ShapeTool::Ellipse, SessionType::TransformSingle, Some(Handle::BottomRight)),
        (ShapeTool::Triangle, SessionType::TransformSingle, Some(Handle::BottomRight)),
        (ShapeTool::Draw, SessionType::Draw, None),
    ];

    for (tool, session_type, handle) in expected {
        let mut editor = editor_with(tool);
        editor
            .pointer_down(Point::new(1.0, 1.0), PointerButton::Primary)
            .unwrap();

        let session = editor.document.session().unwrap();
        assert_eq!(session.session_type, session_type, "{tool}");
        assert_eq!(session.handle, handle, "{tool}");
        assert!(session.is_creating);
        assert_eq!(editor.status(), ToolStatus::Creating);
    }
}

#[test]
fn test_drag_arrow_end_handle() {
    let mut editor = editor_with(ShapeTool::Arrow);
    editor
        .pointer_down(Point::new(10.0, 10.0), PointerButton::Primary)
        .unwrap();
    editor.pointer_move(Point::new(40.0, 30.0)).unwrap();
    editor.pointer_up().unwrap();

    let shape = editor.document.current_shapes()[0].clone();
    assert_eq!(shape.shape_type(), ShapeType::Arrow);
    let geometry = shape.kind.linear().unwrap();
    assert_eq!(geometry.handles.start, Point::new(0.0, 0.0));
    assert_eq!(geometry.handles.end, Point::new(30.0, 20.0));
    assert_eq!(geometry.decorations.end, Some(Decoration::Arrow));
    assert_eq!(editor.status(), ToolStatus::Idle);
}

#[test]
fn test_drag_rectangle_corner() {
    let mut editor = editor_with(ShapeTool::Rectangle);
    editor
        .pointer_down(Point::new(10.0, 10.0), PointerButton::Primary)
        .unwrap();
    editor.pointer_move(Point::new(60.0, 35.0)).unwrap();
    editor.pointer_up().unwrap();

    let shape = editor.document.current_shapes()[0].clone();
    assert_eq!(
        shape.kind,
        ShapeKind::Rectangle {
            size: Point::new(50.0, 25.0)
        }
    );
    assert_eq!(shape.bounds(), (10.0, 10.0, 60.0, 35.0));
}

#[test]
fn test_drag_ellipse_and_triangle_keep_minimum_size() {
    let mut editor = editor_with(ShapeTool::Ellipse);
    editor
        .pointer_down(Point::new(10.0, 10.0), PointerButton::Primary)
        .unwrap();
    editor.pointer_move(Point::new(0.0, 30.0)).unwrap();
    editor.pointer_up().unwrap();
    assert_eq!(
        editor.document.current_shapes()[0].kind,
        ShapeKind::Ellipse {
            radius: Point::new(1.0, 10.0)
        }
    );

    editor.select_tool(ShapeTool::Triangle).unwrap();
    editor
        .pointer_down(Point::new(0.0, 0.0), PointerButton::Primary)
        .unwrap();
    editor.pointer_move(Point::new(-5.0, -5.0)).unwrap();
    editor.pointer_up().unwrap();
    assert_eq!(
        editor.document.current_shapes()[1].kind,
        ShapeKind::Triangle {
            size: Point::new(1.0, 1.0)
        }
    );
}

#[test]
fn test_freehand_collects_points() {
    let mut editor = editor_with(ShapeTool::Draw);
    editor
        .pointer_down(Point::new(5.0, 5.0), PointerButton::Primary)
        .unwrap();
    for (x, y) in [(6.0, 5.0), (7.0, 6.0), (9.0, 9.0)] {
        editor.pointer_move(Point::new(x, y)).unwrap();
    }
    editor.pointer_up().unwrap();

    match &editor.document.current_shapes()[0].kind {
        ShapeKind::Draw { points } => assert_eq!(
            points,
            &vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(2.0, 1.0),
                Point::new(4.0, 4.0),
            ]
        ),
        other => panic!("expected a freehand stroke, got {other:?}"),
    }
}

#[test]
fn test_moves_without_session_only_track_pointer() {
    let mut editor = editor_with(ShapeTool::Line);
    editor.pointer_move(Point::new(3.0, 3.0)).unwrap();
    editor.pointer_up().unwrap();
    assert_eq!(editor.document.shape_count(), 0);
}

#[test]
fn test_config_tool_names_match_tools() {
    let names: Vec<&str> = ShapeTool::ALL.iter().map(|tool| tool.name()).collect();
    assert_eq!(names, TOOL_NAMES.to_vec());
    for name in TOOL_NAMES {
        assert_eq!(name.parse::<ShapeTool>().unwrap().name(), name);
    }
}
