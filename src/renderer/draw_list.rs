//! Recording sink: keeps every draw request for inspection or serialization

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{DrawSink, Style};

/// One recorded draw request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Lines { points: Vec<Vec2>, style: Style },
    Curve { points: [Vec2; 3], style: Style },
    Intersections { points: Vec<Vec2>, style: Style },
}

impl DrawCommand {
    pub fn style(&self) -> Option<Style> {
        match self {
            DrawCommand::Clear { .. } => None,
            DrawCommand::Lines { style, .. }
            | DrawCommand::Curve { style, .. }
            | DrawCommand::Intersections { style, .. } => Some(*style),
        }
    }
}

/// Draw requests in emission order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands drawn with `style`
    pub fn with_style(&self, style: Style) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.style() == Some(style))
    }
}

impl DrawSink for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        // Anything before a clear is gone from the surface
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn lines(&mut self, points: &[Vec2], style: Style) {
        self.commands.push(DrawCommand::Lines {
            points: points.to_vec(),
            style,
        });
    }

    fn curve(&mut self, curve: [Vec2; 3], style: Style) {
        self.commands.push(DrawCommand::Curve {
            points: curve,
            style,
        });
    }

    fn intersections(&mut self, points: &[Vec2], style: Style) {
        self.commands.push(DrawCommand::Intersections {
            points: points.to_vec(),
            style,
        });
    }
}
