//! Geometry comparison and transfer between shapes.

use crate::common::Result;
use crate::document::{DocumentHost, ShapeId, ShapeInfo, ShapeKind};

/// Tolerance used for exact comparisons: the smallest positive `f32`, so only
/// identical values compare equal.
pub const EXACT_BLUR: f32 = f32::from_bits(1);

#[inline]
fn tolerance(exact: bool, blur: f32) -> f32 {
    if exact { EXACT_BLUR } else { blur }
}

#[inline]
fn within(a: f32, b: f32, blur: f32) -> bool {
    (a - b).abs() < blur
}

/// Whether both shapes sit at the same left/top, within `blur` unless `exact`.
///
/// False when either shape is absent.
pub fn same_position(a: Option<&ShapeInfo>, b: Option<&ShapeInfo>, exact: bool, blur: f32) -> bool {
    let blur = tolerance(exact, blur);
    match (a, b) {
        (Some(a), Some(b)) => {
            within(a.geometry.left, b.geometry.left, blur) && within(a.geometry.top, b.geometry.top, blur)
        },
        _ => false,
    }
}

/// Whether both shapes have the same width/height, within `blur` unless `exact`.
///
/// False when either shape is absent.
pub fn same_size(a: Option<&ShapeInfo>, b: Option<&ShapeInfo>, exact: bool, blur: f32) -> bool {
    let blur = tolerance(exact, blur);
    match (a, b) {
        (Some(a), Some(b)) => {
            within(a.geometry.width, b.geometry.width, blur)
                && within(a.geometry.height, b.geometry.height, blur)
        },
        _ => false,
    }
}

/// Whether both shapes have the same kind and, for auto shapes, the same preset.
///
/// False when either shape is absent.
pub fn same_type(a: Option<&ShapeInfo>, b: Option<&ShapeInfo>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            a.kind == b.kind && (a.kind != ShapeKind::AutoShape || a.auto_shape_type == b.auto_shape_type)
        },
        _ => false,
    }
}

/// Copy rotation, size and position from `reference` to `candidate`.
///
/// The candidate's aspect lock is lifted while the size is written, otherwise
/// setting the width would rescale the height behind our back; the original
/// lock state is restored afterwards.
pub fn copy_basic_geometry<H>(host: &mut H, reference: ShapeId, candidate: ShapeId) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    let source = host.shape(reference)?.geometry;
    let locked = host.shape(candidate)?.geometry.lock_aspect_ratio;

    host.set_rotation(candidate, source.rotation)?;

    host.set_lock_aspect_ratio(candidate, false)?;
    host.set_width(candidate, source.width)?;
    host.set_height(candidate, source.height)?;
    host.set_lock_aspect_ratio(candidate, locked)?;

    host.set_left(candidate, source.left)?;
    host.set_top(candidate, source.top)?;
    Ok(())
}

/// Stretch a shape over the whole slide. The aspect lock is cleared for good.
pub fn fit_shape_to_slide<H>(host: &mut H, shape: ShapeId) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    let (width, height) = host.slide_size();
    host.set_lock_aspect_ratio(shape, false)?;
    host.set_left(shape, 0.0)?;
    host.set_top(shape, 0.0)?;
    host.set_width(shape, width)?;
    host.set_height(shape, height)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{AutoShapeType, Geometry, MemoryDocument, NewShape};
    use proptest::prelude::*;

    fn info(kind: ShapeKind, preset: Option<AutoShapeType>, geometry: Geometry) -> ShapeInfo {
        ShapeInfo {
            id: ShapeId(1),
            name: "s".to_string(),
            kind,
            auto_shape_type: preset,
            geometry,
            z_position: 1,
            visible: true,
            has_text_frame: false,
        }
    }

    #[test]
    fn test_absent_shapes_never_match() {
        let a = info(ShapeKind::Picture, None, Geometry::new(0.0, 0.0, 1.0, 1.0));
        assert!(!same_position(Some(&a), None, true, 0.0));
        assert!(!same_size(None, Some(&a), false, 100.0));
        assert!(!same_type(None, None));
    }

    #[test]
    fn test_blur_only_applies_when_not_exact() {
        let a = info(ShapeKind::TextBox, None, Geometry::new(10.0, 10.0, 5.0, 5.0));
        let b = info(ShapeKind::TextBox, None, Geometry::new(20.0, 14.0, 5.0, 5.0));
        assert!(same_position(Some(&a), Some(&b), false, 15.0));
        assert!(!same_position(Some(&a), Some(&b), false, 10.0));
        assert!(!same_position(Some(&a), Some(&b), true, 15.0));
    }

    #[test]
    fn test_auto_shape_preset_must_match() {
        let g = Geometry::new(0.0, 0.0, 1.0, 1.0);
        let rect = info(ShapeKind::AutoShape, Some(AutoShapeType::Rectangle), g);
        let oval = info(ShapeKind::AutoShape, Some(AutoShapeType::Oval), g);
        assert!(!same_type(Some(&rect), Some(&oval)));

        // presets are irrelevant for other kinds
        let pic_a = info(ShapeKind::Picture, Some(AutoShapeType::Rectangle), g);
        let pic_b = info(ShapeKind::Picture, None, g);
        assert!(same_type(Some(&pic_a), Some(&pic_b)));
    }

    #[test]
    fn test_copy_geometry_through_aspect_lock() {
        let mut doc = MemoryDocument::default();
        let slide = doc.add_slide();
        let reference = doc
            .add_shape(
                slide,
                NewShape::auto_shape(AutoShapeType::Rectangle, 30.0, 40.0, 300.0, 50.0).with_rotation(15.0),
            )
            .unwrap();
        let candidate = doc
            .add_shape(
                slide,
                NewShape::auto_shape(AutoShapeType::Rectangle, 0.0, 0.0, 100.0, 100.0).with_locked_aspect(true),
            )
            .unwrap();

        copy_basic_geometry(&mut doc, reference, candidate).unwrap();

        let geometry = doc.shape(candidate).unwrap().geometry;
        assert_eq!(geometry.rotation, 15.0);
        assert_eq!((geometry.width, geometry.height), (300.0, 50.0));
        assert_eq!((geometry.left, geometry.top), (30.0, 40.0));
        assert!(geometry.lock_aspect_ratio);
    }

    #[test]
    fn test_fit_shape_to_slide() {
        let mut doc = MemoryDocument::new(960.0, 540.0);
        let slide = doc.add_slide();
        let pic = doc
            .add_shape(
                slide,
                NewShape::of_kind(ShapeKind::Picture, 5.0, 5.0, 10.0, 20.0).with_locked_aspect(true),
            )
            .unwrap();

        fit_shape_to_slide(&mut doc, pic).unwrap();
        let geometry = doc.shape(pic).unwrap().geometry;
        assert_eq!(geometry, Geometry::new(0.0, 0.0, 960.0, 540.0));
    }

    proptest! {
        #[test]
        fn prop_comparisons_are_reflexive(
            left in -1.0e4f32..1.0e4,
            top in -1.0e4f32..1.0e4,
            width in 0.0f32..1.0e4,
            height in 0.0f32..1.0e4,
        ) {
            let s = info(ShapeKind::AutoShape, Some(AutoShapeType::Oval), Geometry::new(left, top, width, height));
            prop_assert!(same_type(Some(&s), Some(&s)));
            prop_assert!(same_position(Some(&s), Some(&s), true, 0.0));
            prop_assert!(same_size(Some(&s), Some(&s), true, 0.0));
        }
    }
}
