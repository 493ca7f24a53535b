use glam::Vec2;
use std::sync::Arc;
use symbol_shape_editor::app::tools::{arc_solver, ToolContext};
use symbol_shape_editor::{Angle, DrawShapeTool, ShapeMode, Symbol, UiState, UndoStack};

struct Editor {
    symbol: Arc<Symbol>,
    history: UndoStack,
    ui: UiState,
}

impl Editor {
    fn new() -> Self {
        Self {
            symbol: Arc::new(Symbol::new("flow")),
            history: UndoStack::default(),
            ui: UiState::new(),
        }
    }

    fn ctx(&mut self) -> ToolContext<'_> {
        ToolContext::new(&mut self.symbol, &mut self.history, &mut self.ui, 0.0)
    }

    fn tool(&mut self, mode: ShapeMode) -> DrawShapeTool {
        let mut tool = DrawShapeTool::new(mode);
        assert!(tool.activate(&mut self.ctx()));
        tool
    }
}

fn p(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

#[test]
fn initial_vertex_count_is_fixed_per_mode() {
    let expected = [
        (ShapeMode::Line, 2),
        (ShapeMode::Rectangle, 5),
        (ShapeMode::Polygon, 2),
        (ShapeMode::Arc, 4),
    ];
    for (mode, count) in expected {
        let mut editor = Editor::new();
        let mut tool = editor.tool(mode);

        assert!(tool.on_pointer_down(&mut editor.ctx(), p(1.0, 1.0)));

        let construction = tool.construction().expect("construction started");
        assert_eq!(construction.path.len(), count, "{mode}");
        let shape = tool.current_shape().expect("staged shape");
        let staged = editor.symbol.polygon(shape).expect("staged in document");
        assert_eq!(staged.path.vertices().len(), count, "{mode}");
    }
}

#[test]
fn pointer_move_never_changes_history_length() {
    for mode in ShapeMode::ALL {
        let mut editor = Editor::new();
        let mut tool = editor.tool(mode);
        tool.on_pointer_down(&mut editor.ctx(), p(0.0, 0.0));

        for step in 1..20 {
            let t = step as f32;
            assert!(tool.on_pointer_move(&mut editor.ctx(), p(t, t * 0.5)));
            assert_eq!(editor.history.len(), 0, "{mode}");
        }
    }
}

#[test]
fn zero_size_rectangle_inserts_nothing() {
    let mut editor = Editor::new();
    let mut tool = editor.tool(ShapeMode::Rectangle);

    tool.on_pointer_down(&mut editor.ctx(), p(0.0, 0.0));
    tool.on_pointer_move(&mut editor.ctx(), p(0.0, 0.0));
    assert!(tool.on_pointer_confirm(&mut editor.ctx(), p(0.0, 0.0)));

    assert!(!tool.is_constructing());
    assert_eq!(editor.symbol.polygon_count(), 0);
    assert_eq!(editor.history.len(), 0);
    assert!(editor.ui.notifications.is_empty());
}

#[test]
fn rectangle_commits_closed_box_between_opposite_corners() {
    let mut editor = Editor::new();
    let mut tool = editor.tool(ShapeMode::Rectangle);

    tool.on_pointer_down(&mut editor.ctx(), p(0.0, 0.0));
    assert!(tool.on_pointer_confirm(&mut editor.ctx(), p(10.0, 5.0)));

    assert_eq!(editor.history.len(), 1);
    let polygon = editor.symbol.polygons().next().expect("rectangle committed");
    assert!(polygon.path.is_closed());
    let positions: Vec<Vec2> = polygon.path.vertices().iter().map(|v| v.pos).collect();
    assert_eq!(positions.len(), 5);
    assert!(positions.contains(&p(0.0, 0.0)));
    assert!(positions.contains(&p(10.0, 5.0)));
    assert!(positions.contains(&p(10.0, 0.0)));
    assert!(positions.contains(&p(0.0, 5.0)));
}

#[test]
fn arc_sweep_keeps_direction_past_ninety_degrees() {
    let center = p(0.0, 0.0);
    let start = p(10.0, 0.0);
    let cursor = Vec2::from_angle((-5.0f32).to_radians()) * 10.0;

    let sweep = arc_solver::compute_sweep(start, cursor, center, Angle::from_deg(100.0));

    assert!(sweep.is_positive());
    approx::assert_relative_eq!(sweep.to_deg(), 355.0, epsilon = 1e-3);

    // below the threshold the raw direction wins
    let small = arc_solver::compute_sweep(start, cursor, center, Angle::from_deg(40.0));
    approx::assert_relative_eq!(small.to_deg(), -5.0, epsilon = 1e-3);
}

#[test]
fn arc_split_depends_on_sweep_magnitude() {
    let center = p(0.0, 0.0);
    let start = p(10.0, 0.0);
    for degrees in [-359.0f32, -300.0, -270.5, 270.5, 300.0, 359.0] {
        let vertices = arc_solver::build_swept_vertices(start, center, Angle::from_deg(degrees));
        assert_eq!(vertices.len(), 3, "{degrees}");
        let total = vertices[0].angle.to_deg() + vertices[1].angle.to_deg();
        approx::assert_relative_eq!(total, degrees, epsilon = 1e-3);
    }
    for degrees in [-270.0f32, -90.0, 1.0, 180.0, 270.0] {
        let vertices = arc_solver::build_swept_vertices(start, center, Angle::from_deg(degrees));
        assert_eq!(vertices.len(), 2, "{degrees}");
        approx::assert_relative_eq!(vertices[0].angle.to_deg(), degrees, epsilon = 1e-3);
    }
}

#[test]
fn abort_before_confirm_restores_document_and_history() {
    for mode in ShapeMode::ALL {
        let mut editor = Editor::new();
        let mut tool = editor.tool(ShapeMode::Rectangle);
        tool.on_pointer_down(&mut editor.ctx(), p(0.0, 0.0));
        tool.on_pointer_confirm(&mut editor.ctx(), p(3.0, 3.0));
        let symbol_before = (*editor.symbol).clone();
        let history_before = editor.history.len();

        let mut tool = editor.tool(mode);
        tool.on_pointer_down(&mut editor.ctx(), p(5.0, 5.0));
        tool.on_pointer_move(&mut editor.ctx(), p(8.0, 9.0));
        assert!(tool.on_abort_command(&mut editor.ctx()));

        assert_eq!(*editor.symbol, symbol_before, "{mode}");
        assert_eq!(editor.history.len(), history_before, "{mode}");
        assert_eq!(editor.ui.highlighted_shape, None);
    }
}

#[test]
fn polygon_abort_keeps_finalized_segments() {
    let mut editor = Editor::new();
    let mut tool = editor.tool(ShapeMode::Polygon);

    tool.on_pointer_confirm(&mut editor.ctx(), p(0.0, 0.0));
    tool.on_pointer_confirm(&mut editor.ctx(), p(10.0, 0.0));
    tool.on_pointer_confirm(&mut editor.ctx(), p(10.0, 10.0));
    assert!(tool.on_abort_command(&mut editor.ctx()));

    assert_eq!(editor.history.len(), 2);
    let polygon = editor.symbol.polygons().next().expect("polygon kept");
    assert_eq!(polygon.path.segment_count(), 2);
    let positions: Vec<Vec2> = polygon.path.vertices().iter().map(|v| v.pos).collect();
    assert_eq!(positions, vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)]);
}

#[test]
fn write_protected_symbol_reports_error_and_stays_idle() {
    let mut editor = Editor::new();
    let mut symbol = Symbol::new("locked");
    symbol.set_read_only(true);
    editor.symbol = Arc::new(symbol);
    let mut tool = editor.tool(ShapeMode::Line);

    assert!(!tool.on_pointer_down(&mut editor.ctx(), p(0.0, 0.0)));

    assert!(!tool.is_constructing());
    assert_eq!(editor.symbol.polygon_count(), 0);
    assert_eq!(editor.ui.notifications.len(), 1);
    assert!(!editor.history.is_group_active());
}
