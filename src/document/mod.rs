//! Presentation document model and the host capability surface.
//!
//! The model mirrors what presentation engines expose through their object
//! models: slides own shapes, shapes may own a text frame, and every slide has
//! an ordered animation timeline plus a transition descriptor.
//!
//! # Architecture
//!
//! - [`DocumentHost`]: the operations an engine must provide. Algorithms in
//!   [`crate::presentation`] are generic over it.
//! - [`MemoryDocument`]: an arena-backed engine implementing the whole surface,
//!   used for tests and for hosts that load documents into memory.
//! - Plain data types ([`ShapeInfo`], [`TextSpan`], [`AnimationEntry`], ...)
//!   passed across the surface.
//!
//! # Example
//!
//! ```rust
//! use slidewright::document::{DocumentHost, MemoryDocument, NewShape};
//!
//! let mut doc = MemoryDocument::default();
//! let slide = doc.add_slide();
//! let title = doc.add_shape(slide, NewShape::text_box(40.0, 40.0, 640.0, 80.0, "Agenda"))?;
//!
//! assert_eq!(doc.shape(title)?.z_position, 1);
//! # Ok::<(), slidewright::common::Error>(())
//! ```

// Submodule declarations
mod host;
mod memory;
mod shape;
mod slide;
mod text;
mod timeline;

// Re-exports
pub use host::DocumentHost;
pub use memory::{ExportRequest, ExportTarget, INDICATOR_NAME, MemoryDocument, NewShape};
pub use shape::{AutoShapeType, Geometry, ShapeFormat, ShapeId, ShapeInfo, ShapeKind};
pub use slide::{EffectTransition, SlideId, SlideTransition};
pub use text::{FormattedText, PARAGRAPH_TERMINATOR, TextBody, TextFormat, TextSpan};
pub use timeline::{AnimationEntry, EffectKind, Timeline, TriggerKind};
