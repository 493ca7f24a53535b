//! Symbol Shape Editor library.
//! Drawing-tool state machine for lines, rectangles, polygons and arcs,
//! exported as a library for tests and the headless host.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawShapeTool, EditError, EditTransaction,
    ShapeMode, StyleSnapshot, ToolHost, UiState, UndoStack,
};
pub use core::{Angle, DocumentError, GraphicsLayer, Path, Polygon, ShapeId, Symbol, Vertex};
pub use shared::EditorOptions;
