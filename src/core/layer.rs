//! Graphics layers a symbol polygon can be placed on.

use serde::{Deserialize, Serialize};

/// Symbol and schematic layers that accept polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphicsLayer {
    /// Visible symbol outline (the usual target)
    #[default]
    SymbolOutlines,
    /// Visible area that selects the symbol when clicked
    SymbolGrabAreas,
    /// Invisible area that selects the symbol when clicked
    SymbolHiddenGrabAreas,
    /// Schematic documentation
    SchematicDocumentation,
    /// Schematic comments
    SchematicComments,
    /// Schematic guide lines
    SchematicGuide,
}

impl GraphicsLayer {
    /// All layers in toolbar order.
    pub const ALL: [GraphicsLayer; 6] = [
        GraphicsLayer::SymbolOutlines,
        GraphicsLayer::SymbolGrabAreas,
        GraphicsLayer::SymbolHiddenGrabAreas,
        GraphicsLayer::SchematicDocumentation,
        GraphicsLayer::SchematicComments,
        GraphicsLayer::SchematicGuide,
    ];

    /// Stable identifier as used in library files.
    pub fn as_str(self) -> &'static str {
        match self {
            GraphicsLayer::SymbolOutlines => "sym_outlines",
            GraphicsLayer::SymbolGrabAreas => "sym_grab_areas",
            GraphicsLayer::SymbolHiddenGrabAreas => "sym_hidden_grab_areas",
            GraphicsLayer::SchematicDocumentation => "sch_documentation",
            GraphicsLayer::SchematicComments => "sch_comments",
            GraphicsLayer::SchematicGuide => "sch_guide",
        }
    }
}

impl std::fmt::Display for GraphicsLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
