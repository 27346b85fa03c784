//! Presentation algorithms: shape matching and synchronization, z-order moves,
//! animation splicing and slide consolidation.
//!
//! Every algorithm is generic over [`DocumentHost`](crate::document::DocumentHost)
//! and re-reads document state through it on each step, so the same code runs
//! against [`MemoryDocument`](crate::document::MemoryDocument) and against a
//! live engine binding.
//!
//! # Example
//!
//! ```rust
//! use slidewright::common::Settings;
//! use slidewright::document::{DocumentHost, MemoryDocument, NewShape, SlideTransition};
//! use slidewright::presentation::squash;
//!
//! let mut doc = MemoryDocument::default();
//! let first = doc.add_slide();
//! let second = doc.add_slide();
//! doc.add_shape(first, NewShape::text_box(40.0, 40.0, 640.0, 80.0, "Step 1"))?;
//! doc.add_shape(second, NewShape::text_box(40.0, 40.0, 640.0, 80.0, "Step 2"))?;
//! doc.set_transition(first, SlideTransition::after(2.0))?;
//!
//! squash(&mut doc, &[first, second], &Settings::default())?;
//!
//! assert_eq!(doc.slides(), vec![first]);
//! assert_eq!(doc.timeline(first)?.len(), 2);
//! # Ok::<(), slidewright::common::Error>(())
//! ```

// Submodule declarations
mod animation;
mod geometry;
mod matcher;
mod shape_ops;
mod squash;
mod sync;
mod text;
mod zorder;

// Re-exports
pub use animation::{add_appear, add_disappear, make_view_time_invisible, splice_effect};
pub use geometry::{EXACT_BLUR, copy_basic_geometry, fit_shape_to_slide, same_position, same_size, same_type};
pub use matcher::{find_best_match, find_best_match_within, sync_shape_range};
pub use shape_ops::{
    PICTURE_EXPORTING_RATIO, corruption_correction, export_shapes, export_slide, has_default_name, is_corrupted, is_hidden,
};
pub use squash::{sort_by_index, squash};
pub use sync::{SyncOptions, SyncOutcome, sync_shape, sync_whole_shape};
pub use text::{paragraph_texts, set_text, sync_text_range};
pub use zorder::{move_to_just_behind, move_to_just_in_front, move_until_behind, move_until_in_front, sort_by_z_order};
