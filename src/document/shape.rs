//! Shape identity, kind and geometry.

use crate::common::RGBColor;
use std::fmt;

/// Stable identifier of a shape inside a document.
///
/// Ids are never reused, so an id whose shape was deleted (or cut) simply stops
/// resolving instead of pointing at an unrelated shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}

/// Discriminated shape type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Preset geometry shape (rectangle, oval, arrow, ...)
    AutoShape,
    /// Group of shapes
    Group,
    /// Embedded chart
    Chart,
    /// Picture
    Picture,
    /// Text box
    TextBox,
    /// Layout placeholder
    Placeholder,
    /// Anything else (media, OLE objects, ...)
    Other,
}

impl ShapeKind {
    /// Prefix the host uses when generating a default name ("Rectangle 3", "Group 7").
    pub fn default_name_prefix(&self, auto_shape_type: Option<AutoShapeType>) -> &'static str {
        match self {
            ShapeKind::AutoShape => auto_shape_type.map_or("AutoShape", |t| t.display_name()),
            ShapeKind::Group => "Group",
            ShapeKind::Chart => "Chart",
            ShapeKind::Picture => "Picture",
            ShapeKind::TextBox => "TextBox",
            ShapeKind::Placeholder => "Placeholder",
            ShapeKind::Other => "Object",
        }
    }
}

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoShapeType {
    Rectangle,
    RoundedRectangle,
    Oval,
    Triangle,
    RightArrow,
    /// Preset not covered above, by host preset id
    Other(u16),
}

impl AutoShapeType {
    fn display_name(&self) -> &'static str {
        match self {
            AutoShapeType::Rectangle => "Rectangle",
            AutoShapeType::RoundedRectangle => "Rounded Rectangle",
            AutoShapeType::Oval => "Oval",
            AutoShapeType::Triangle => "Isosceles Triangle",
            AutoShapeType::RightArrow => "Right Arrow",
            AutoShapeType::Other(_) => "AutoShape",
        }
    }
}

/// Position, size and rotation of a shape, in document units (points).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    /// Rotation in degrees
    pub rotation: f32,
    /// When set, changing one dimension rescales the other
    pub lock_aspect_ratio: bool,
}

impl Geometry {
    /// Create an unrotated, unlocked geometry.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
            rotation: 0.0,
            lock_aspect_ratio: false,
        }
    }
}

/// Shape-level formatting moved by pick-up/apply. Treated as opaque by the
/// algorithms.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeFormat {
    pub fill: Option<RGBColor>,
    pub line: Option<RGBColor>,
    pub line_weight: f32,
}

/// Snapshot of a shape's queryable state.
///
/// A snapshot is only valid until the next host mutation; re-query after
/// every call that may move, rename or replace shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInfo {
    pub id: ShapeId,
    pub name: String,
    pub kind: ShapeKind,
    /// Preset geometry, only meaningful for [`ShapeKind::AutoShape`]
    pub auto_shape_type: Option<AutoShapeType>,
    pub geometry: Geometry,
    /// 1-based stacking position; larger is further forward
    pub z_position: usize,
    pub visible: bool,
    pub has_text_frame: bool,
}
