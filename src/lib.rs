//! Slidewright - shape synchronization and slide consolidation for presentation documents
//!
//! This library implements editing algorithms on top of a presentation engine's
//! object model: it pairs and synchronizes shapes across slides, moves shapes
//! relative to each other in z-order, and merges a run of slides into a single
//! slide whose animation timeline replays the original slide advances.
//!
//! # Features
//!
//! - **Shape matching**: pair shapes across two collections by type, position and size
//! - **Shape sync**: copy geometry, shape format, text content and text format
//! - **Z-order moves**: place a shape directly in front of or behind another
//! - **Animation splicing**: add appear/disappear effects without duplicating authored ones
//! - **Slide squash**: merge slides, turning their transitions into effect triggers
//! - **Host abstraction**: everything runs against the [`document::DocumentHost`] trait;
//!   [`document::MemoryDocument`] implements it in memory
//!
//! # Example - Synchronizing two shapes
//!
//! ```rust
//! use slidewright::document::{AutoShapeType, DocumentHost, MemoryDocument, NewShape};
//! use slidewright::presentation::{SyncOutcome, sync_whole_shape};
//!
//! let mut doc = MemoryDocument::default();
//! let master = doc.add_slide();
//! let copy = doc.add_slide();
//!
//! let reference = doc.add_shape(
//!     master,
//!     NewShape::auto_shape(AutoShapeType::RoundedRectangle, 100.0, 80.0, 300.0, 120.0).with_text("Q3 results"),
//! )?;
//! let candidate = doc.add_shape(
//!     copy,
//!     NewShape::auto_shape(AutoShapeType::RoundedRectangle, 0.0, 0.0, 50.0, 50.0).with_text("draft"),
//! )?;
//!
//! let outcome = sync_whole_shape(&mut doc, reference, candidate, copy)?;
//! assert_eq!(outcome, SyncOutcome::Synced(candidate));
//! assert_eq!(doc.text(candidate)?, "Q3 results");
//! assert_eq!(doc.shape(candidate)?.geometry.width, 300.0);
//! # Ok::<(), slidewright::common::Error>(())
//! ```
//!
//! # Example - Loading settings
//!
//! ```no_run
//! use slidewright::common::Settings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_yaml_file("slidewright.yaml")?;
//! println!("match tolerance: {}", settings.match_blur_radius);
//! # Ok(())
//! # }
//! ```

/// Shared infrastructure: errors, settings and style types
pub mod common;

/// Presentation document model and the host capability surface
pub mod document;

/// Algorithms operating on a [`document::DocumentHost`]
pub mod presentation;

// Re-export commonly used types for convenience
pub use common::{Error, Result, Settings};
pub use document::{DocumentHost, MemoryDocument};
