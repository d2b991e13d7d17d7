use crate::core::host::OverlayHandle;
use crate::core::space::{Point, Rect};
use crate::ui::color::Rgba;
use serde::Serialize;

/// One draw call of a frame. A frame is a `Vec<Actor>` built in draw order
/// and handed to the host unchanged.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Actor {
    /// Solid rectangle
    Quad { rect: Rect, color: Rgba },

    /// Sprite from a streamed texture dictionary
    Sprite {
        dict: String,
        texture: String,
        rect: Rect,
        rotation: f32,
        tint: Rgba,
    },

    /// Single line of text anchored at its top-left
    Text {
        content: String,
        font: u8,
        scale: f32,
        color: Rgba,
        at: Point,
    },

    /// Animated overlay movie
    Overlay {
        handle: OverlayHandle,
        rect: Rect,
        tint: Rgba,
        layer: i32,
    },
}

impl Actor {
    pub fn text(content: impl Into<String>, font: u8, scale: f32, color: Rgba, at: Point) -> Self {
        Self::Text {
            content: content.into(),
            font,
            scale,
            color,
            at,
        }
    }

    pub fn sprite(dict: &str, texture: &str, rect: Rect, tint: Rgba) -> Self {
        Self::Sprite {
            dict: dict.to_owned(),
            texture: texture.to_owned(),
            rect,
            rotation: 0.0,
            tint,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}
