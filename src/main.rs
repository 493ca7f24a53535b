//! Symbol Shape Editor (headless host).
//!
//! Replays a scripted sequence of pointer and toolbar events through the
//! application controller and reports the resulting symbol.

use anyhow::Context;
use serde::Deserialize;
use symbol_shape_editor::{
    AppController, AppIntent, AppState, EditorOptions, GraphicsLayer, ShapeMode,
};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

/// Event script as read from TOML.
#[derive(Debug, Deserialize)]
struct Script {
    /// Drawing mode activated before the first event
    mode: ShapeMode,
    /// Events in replay order
    #[serde(default)]
    events: Vec<ScriptEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ScriptEvent {
    Press { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    DoubleClick { x: f32, y: f32 },
    Cancel,
    Undo,
    Redo,
    Layer { value: GraphicsLayer },
    Width { value: f32 },
    Angle { value: f32 },
    Fill { value: bool },
    GrabArea { value: bool },
}

impl ScriptEvent {
    fn into_intent(self) -> AppIntent {
        match self {
            ScriptEvent::Press { x, y } => AppIntent::PointerPressed {
                world_pos: glam::Vec2::new(x, y),
            },
            ScriptEvent::Move { x, y } => AppIntent::PointerMoved {
                world_pos: glam::Vec2::new(x, y),
            },
            ScriptEvent::DoubleClick { x, y } => AppIntent::PointerDoubleClicked {
                world_pos: glam::Vec2::new(x, y),
            },
            ScriptEvent::Cancel => AppIntent::CancelRequested,
            ScriptEvent::Undo => AppIntent::UndoRequested,
            ScriptEvent::Redo => AppIntent::RedoRequested,
            ScriptEvent::Layer { value } => AppIntent::LayerChanged { layer: value },
            ScriptEvent::Width { value } => AppIntent::LineWidthChanged { width: value },
            ScriptEvent::Angle { value } => AppIntent::AngleChanged {
                angle: symbol_shape_editor::Angle::from_deg(value),
            },
            ScriptEvent::Fill { value } => AppIntent::FillChanged { filled: value },
            ScriptEvent::GrabArea { value } => AppIntent::GrabAreaChanged { grab_area: value },
        }
    }
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Symbol Shape Editor v{} starting...",
            env!("CARGO_PKG_VERSION")
        );

        let script_path = std::env::args()
            .nth(1)
            .context("usage: symbol-shape-editor <script.toml>")?;
        let content = std::fs::read_to_string(&script_path)
            .with_context(|| format!("cannot read script {script_path}"))?;
        let script: Script =
            toml::from_str(&content).with_context(|| format!("invalid script {script_path}"))?;

        let options = EditorOptions::load_from_file(&EditorOptions::config_path());
        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        controller.handle_intent(&mut state, AppIntent::SelectToolRequested { mode: script.mode })?;

        for (index, event) in script.events.into_iter().enumerate() {
            let description = format!("{event:?}");
            let handled = controller.handle_intent(&mut state, event.into_intent())?;
            log::info!("#{index} {description}: handled={handled}");

            for note in state.ui.take_notifications() {
                log::warn!("{}: {}", note.title, note.message);
            }
        }

        Self::report(&state);
        Ok(())
    }

    fn report(state: &AppState) {
        log::info!(
            "Symbol '{}': {} polygon(s), undo depth {}, constructing: {}",
            state.symbol.name,
            state.polygon_count(),
            state.history.len(),
            state.tools.is_constructing()
        );
        for polygon in state.symbol.polygons() {
            log::info!(
                "  {} on {} width {:.3} filled={} grab_area={} vertices={}",
                polygon.id,
                polygon.layer,
                polygon.line_width,
                polygon.filled,
                polygon.grab_area,
                polygon.path.vertices().len()
            );
        }
    }
}
