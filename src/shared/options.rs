//! Runtime options of the editor, stored as TOML.

use crate::app::history::DEFAULT_HISTORY_DEPTH;
use crate::app::tools::DEFAULT_LINE_WIDTH;
use crate::core::GraphicsLayer;
use serde::{Deserialize, Serialize};

/// Default grid interval in mm (0.1 inch).
pub const DEFAULT_GRID_INTERVAL: f32 = 2.54;

/// File name of the options file next to the binary.
pub const CONFIG_FILE_NAME: &str = "symbol_shape_editor.toml";

/// Editor options.
///
/// Stored as `symbol_shape_editor.toml` next to the binary. Missing fields
/// fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Grid interval pointer positions snap to (mm); 0 disables snapping
    #[serde(default = "default_grid_interval")]
    pub grid_interval: f32,
    /// Maximum number of undo steps
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
    /// Initial layer of all drawing tools
    #[serde(default)]
    pub default_layer: GraphicsLayer,
    /// Initial line width of all drawing tools (mm)
    #[serde(default = "default_line_width")]
    pub default_line_width: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            grid_interval: DEFAULT_GRID_INTERVAL,
            history_depth: DEFAULT_HISTORY_DEPTH,
            default_layer: GraphicsLayer::default(),
            default_line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

fn default_grid_interval() -> f32 {
    DEFAULT_GRID_INTERVAL
}

fn default_history_depth() -> usize {
    DEFAULT_HISTORY_DEPTH
}

fn default_line_width() -> f32 {
    DEFAULT_LINE_WIDTH
}

impl EditorOptions {
    /// Loads options from a TOML file, falling back to defaults.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Options loaded from: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Options file is invalid, using defaults: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No options file found, using defaults");
                Self::default()
            }
        }
    }

    /// Writes the options as TOML.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Options saved to: {}", path.display());
        Ok(())
    }

    /// Path of the options file next to the binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("symbol-shape-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let opts: EditorOptions = toml::from_str("grid_interval = 1.27").expect("valid toml");
        assert_eq!(opts.grid_interval, 1.27);
        assert_eq!(opts.history_depth, DEFAULT_HISTORY_DEPTH);
        assert_eq!(opts.default_layer, GraphicsLayer::SymbolOutlines);
        assert_eq!(opts.default_line_width, DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn layer_is_read_by_name() {
        let opts: EditorOptions =
            toml::from_str("default_layer = \"schematic_comments\"").expect("valid toml");
        assert_eq!(opts.default_layer, GraphicsLayer::SchematicComments);
    }

    #[test]
    fn save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "symbol_shape_editor_options_{}.toml",
            std::process::id()
        ));
        let opts = EditorOptions {
            grid_interval: 1.0,
            history_depth: 12,
            default_layer: GraphicsLayer::SchematicGuide,
            default_line_width: 0.35,
        };
        opts.save_to_file(&path).expect("save");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "symbol_shape_editor_invalid_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "grid_interval = \"wide\"").expect("write");
        let loaded = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, EditorOptions::default());
    }
}
