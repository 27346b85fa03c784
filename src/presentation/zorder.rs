//! Relative z-order moves built on single-step primitives.
//!
//! Hosts only offer "one step forward" and "one step backward", and a step may
//! shuffle other shapes too, so a target position is reached by overshooting
//! in one direction and correcting in the other. Every loop stops as soon as
//! a step leaves the position unchanged: the shape hit the front or back.

use crate::common::Result;
use crate::document::{DocumentHost, ShapeId};
use std::cmp::Reverse;
use tracing::debug;

/// Step `shift` forward while it is behind `destination`.
pub fn move_until_behind<H>(host: &mut H, shift: ShapeId, destination: ShapeId) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    loop {
        let current = host.z_position(shift)?;
        if current >= host.z_position(destination)? {
            return Ok(());
        }
        if host.step_forward(shift)? == current {
            debug!(shape = %shift, position = current, "step forward made no progress");
            return Ok(());
        }
    }
}

/// Step `shift` backward while it is in front of `destination`.
pub fn move_until_in_front<H>(host: &mut H, shift: ShapeId, destination: ShapeId) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    loop {
        let current = host.z_position(shift)?;
        if current <= host.z_position(destination)? {
            return Ok(());
        }
        if host.step_backward(shift)? == current {
            debug!(shape = %shift, position = current, "step backward made no progress");
            return Ok(());
        }
    }
}

/// Leave `shift` directly behind `destination`.
pub fn move_to_just_behind<H>(host: &mut H, shift: ShapeId, destination: ShapeId) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    // overshoot forward, then step back past the destination
    move_until_behind(host, shift, destination)?;
    move_until_in_front(host, shift, destination)
}

/// Leave `shift` directly in front of `destination`.
pub fn move_to_just_in_front<H>(host: &mut H, shift: ShapeId, destination: ShapeId) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    // overshoot backward, then step forward past the destination
    move_until_in_front(host, shift, destination)?;
    move_until_behind(host, shift, destination)
}

/// Sort shapes front to back.
pub fn sort_by_z_order<H>(host: &H, shapes: &mut [ShapeId]) -> Result<()>
where
    H: DocumentHost + ?Sized,
{
    let mut keyed = shapes
        .iter()
        .map(|&id| Ok((host.z_position(id)?, id)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by_key(|&(position, _)| Reverse(position));

    for (slot, (_, id)) in shapes.iter_mut().zip(keyed) {
        *slot = id;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{AutoShapeType, MemoryDocument, NewShape};
    use proptest::prelude::*;

    fn stack(count: usize) -> (MemoryDocument, Vec<ShapeId>) {
        let mut doc = MemoryDocument::default();
        let slide = doc.add_slide();
        let ids = (0..count)
            .map(|_| {
                doc.add_shape(slide, NewShape::auto_shape(AutoShapeType::Rectangle, 0.0, 0.0, 1.0, 1.0))
                    .unwrap()
            })
            .collect();
        (doc, ids)
    }

    #[test]
    fn test_just_behind_from_below() {
        let (mut doc, ids) = stack(5);
        move_to_just_behind(&mut doc, ids[0], ids[3]).unwrap();
        assert_eq!(doc.z_position(ids[0]).unwrap() + 1, doc.z_position(ids[3]).unwrap());
    }

    #[test]
    fn test_just_in_front_from_above() {
        let (mut doc, ids) = stack(5);
        move_to_just_in_front(&mut doc, ids[4], ids[1]).unwrap();
        assert_eq!(doc.z_position(ids[4]).unwrap(), doc.z_position(ids[1]).unwrap() + 1);
    }

    #[test]
    fn test_until_behind_is_noop_when_already_in_front() {
        let (mut doc, ids) = stack(3);
        move_until_behind(&mut doc, ids[2], ids[0]).unwrap();
        assert_eq!(doc.z_position(ids[2]).unwrap(), 3);
    }

    #[test]
    fn test_sort_by_z_order_front_to_back() {
        let (doc, ids) = stack(4);
        let mut shapes = vec![ids[1], ids[3], ids[0], ids[2]];
        sort_by_z_order(&doc, &mut shapes).unwrap();
        assert_eq!(shapes, vec![ids[3], ids[2], ids[1], ids[0]]);
    }

    proptest! {
        #[test]
        fn prop_lands_adjacent_to_destination(
            (count, shift, destination) in (2usize..12).prop_flat_map(|n| (Just(n), 0..n, 0..n))
                .prop_filter("distinct shapes", |(_, s, d)| s != d),
            in_front in any::<bool>(),
        ) {
            let (mut doc, ids) = stack(count);
            let (s, d) = (ids[shift], ids[destination]);
            if in_front {
                move_to_just_in_front(&mut doc, s, d).unwrap();
                prop_assert_eq!(doc.z_position(s).unwrap(), doc.z_position(d).unwrap() + 1);
            } else {
                move_to_just_behind(&mut doc, s, d).unwrap();
                prop_assert_eq!(doc.z_position(s).unwrap() + 1, doc.z_position(d).unwrap());
            }
        }
    }
}
