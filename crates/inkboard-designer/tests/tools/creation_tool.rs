//! Creation tool behaviour against the in-memory document.

use inkboard_core::{ColorStyle, PageId, Point, Result, SequentialIdGenerator, ShapeId, ShapeStyle};
use inkboard_designer::{
    CreationTool, Decorations, Document, Handle, LinearGeometry, PointerEvent, Session,
    SessionType, Shape, ShapeKind, ShapeTool, ShapeType, ToolHost, ToolStatus,
};
use inkboard_settings::EditorConfig;

/// Document wrapper counting the mutations a tool asks for.
struct CountingHost {
    document: Document,
    creates: usize,
    sessions: usize,
}

impl CountingHost {
    fn new(document: Document) -> Self {
        Self {
            document,
            creates: 0,
            sessions: 0,
        }
    }
}

impl ToolHost for CountingHost {
    fn read_only(&self) -> bool {
        self.document.read_only()
    }
    fn current_point(&self) -> Point {
        self.document.current_point()
    }
    fn current_page_id(&self) -> PageId {
        self.document.current_page_id()
    }
    fn current_style(&self) -> &ShapeStyle {
        self.document.current_style()
    }
    fn is_showing_grid(&self, page_id: &PageId) -> bool {
        self.document.is_showing_grid(page_id)
    }
    fn closest_grid_snap(&self, page_id: &PageId, point: Point) -> Point {
        self.document.closest_grid_snap(page_id, point)
    }
    fn next_child_index(&self) -> f64 {
        self.document.next_child_index()
    }
    fn patch_create(&mut self, shapes: Vec<Shape>) -> Result<()> {
        self.creates += 1;
        self.document.patch_create(shapes)
    }
    fn start_session(
        &mut self,
        session_type: SessionType,
        shape_id: &ShapeId,
        handle: Option<Handle>,
        is_creating: bool,
    ) -> Result<()> {
        self.sessions += 1;
        self.document
            .start_session(session_type, shape_id, handle, is_creating)
    }
    fn cancel_session(&mut self) -> Result<()> {
        self.document.cancel_session()
    }
}

/// Page `page1` holding one shape with child index 3, pointer at (10.4, 10.4).
fn scenario_host(grid_visible: bool) -> CountingHost {
    let mut config = EditorConfig::default();
    config.grid.size = 10.0;
    let mut document = Document::new(&config);
    document.add_page("page1", "Page 1");
    document.set_current_page("page1").unwrap();
    document
        .set_grid_visible(&PageId::new("page1"), grid_visible)
        .unwrap();
    document
        .patch_create(vec![Shape {
            id: ShapeId::new("existing"),
            parent_id: PageId::new("page1"),
            child_index: 3.0,
            point: Point::new(0.0, 0.0),
            style: ShapeStyle::default(),
            kind: ShapeKind::Rectangle {
                size: Point::new(5.0, 5.0),
            },
        }])
        .unwrap();
    document.set_style(ShapeStyle::default().with_color(ColorStyle::Black));
    document.set_pointer(Point::new(10.4, 10.4));
    CountingHost::new(document)
}

fn line_tool() -> CreationTool {
    CreationTool::new(ShapeTool::Line, Box::new(SequentialIdGenerator::new("new")))
}

#[test]
fn test_line_created_at_raw_pointer() {
    let mut host = scenario_host(false);
    let mut tool = line_tool();

    tool.on_pointer_down(&mut host, &PointerEvent::primary())
        .unwrap();

    let shape = host.document.shape(&ShapeId::new("new1")).unwrap();
    assert_eq!(shape.shape_type(), ShapeType::Line);
    assert_eq!(shape.point, Point::new(10.4, 10.4));
    assert_eq!(shape.parent_id, PageId::new("page1"));
    assert_eq!(shape.child_index, 4.0);
    assert_eq!(shape.style.color, ColorStyle::Black);
    assert_eq!(
        shape.kind,
        ShapeKind::Line(LinearGeometry {
            decorations: Decorations {
                start: None,
                end: None
            },
            ..LinearGeometry::default()
        })
    );

    assert_eq!(host.sessions, 1);
    assert_eq!(
        host.document.session(),
        Some(&Session {
            session_type: SessionType::Arrow,
            shape_id: ShapeId::new("new1"),
            handle: Some(Handle::End),
            is_creating: true,
        })
    );
    assert_eq!(tool.status(), ToolStatus::Creating);
}

#[test]
fn test_line_snapped_to_grid() {
    let mut host = scenario_host(true);
    let mut tool = line_tool();

    tool.on_pointer_down(&mut host, &PointerEvent::primary())
        .unwrap();

    let shape = host.document.shape(&ShapeId::new("new1")).unwrap();
    assert_eq!(shape.point, Point::new(10.0, 10.0));
}

#[test]
fn test_second_pointer_down_while_creating_is_ignored() {
    let mut host = scenario_host(false);
    let mut tool = line_tool();

    tool.on_pointer_down(&mut host, &PointerEvent::primary())
        .unwrap();
    tool.on_pointer_down(&mut host, &PointerEvent::primary())
        .unwrap();

    assert_eq!(host.creates, 1);
    assert_eq!(host.sessions, 1);
    assert_eq!(host.document.shape_count(), 2);
    assert_eq!(tool.status(), ToolStatus::Creating);
}

#[test]
fn test_read_only_host_is_untouched() {
    let mut host = scenario_host(false);
    host.document.set_read_only(true);
    let mut tool = line_tool();

    tool.on_pointer_down(&mut host, &PointerEvent::primary())
        .unwrap();

    assert_eq!(host.creates, 0);
    assert_eq!(host.sessions, 0);
    assert!(host.document.session().is_none());
    assert_eq!(tool.status(), ToolStatus::Idle);
}

#[test]
fn test_style_is_copied_not_shared() {
    let mut host = scenario_host(false);
    let mut tool = line_tool();

    tool.on_pointer_down(&mut host, &PointerEvent::primary())
        .unwrap();
    host.document.style_mut().color = ColorStyle::Red;
    host.document.style_mut().is_filled = true;

    let shape = host.document.shape(&ShapeId::new("new1")).unwrap();
    assert_eq!(shape.style.color, ColorStyle::Black);
    assert!(!shape.style.is_filled);
}

#[test]
fn test_completion_allows_next_shape() {
    let mut host = scenario_host(false);
    let mut tool = line_tool();

    tool.on_pointer_down(&mut host, &PointerEvent::primary())
        .unwrap();
    host.document.complete_session().unwrap();
    tool.on_session_complete();

    tool.on_pointer_down(&mut host, &PointerEvent::primary())
        .unwrap();

    let second = host.document.shape(&ShapeId::new("new2")).unwrap();
    assert_eq!(second.child_index, 5.0);
    assert_eq!(host.creates, 2);
}

#[test]
fn test_session_start_failure_propagates() {
    let mut host = scenario_host(false);
    let mut tool = line_tool();
    host.document
        .start_session(
            SessionType::TransformSingle,
            &ShapeId::new("existing"),
            Some(Handle::BottomRight),
            false,
        )
        .unwrap();

    let err = tool
        .on_pointer_down(&mut host, &PointerEvent::primary())
        .unwrap_err();

    assert!(err.is_session_error());
    assert_eq!(tool.status(), ToolStatus::Idle);
}
