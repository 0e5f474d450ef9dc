//! Conversions between 1, 2 and 3 dimensional arrays and the canonical 3 dimensional form.
//!
//! A lower dimensional array is embedded in three dimensions by padding the leading components.
//! Ids are padded with 0 and ranges are padded with 1 so the number of work items in a range
//! does not change. Extraction keeps the trailing components and drops the rest without
//! checking them, so it only inverts an embedding of the same kind.

use crate::{CompatibleArray, Id, Range, StaticArray};

/// Copy any compatible array into a [`StaticArray`] component by component.
pub fn make_static_array<const D: usize>(array: impl CompatibleArray<D>) -> StaticArray<D> {
    StaticArray::from_array(std::array::from_fn(|dim| array.component(dim)))
}

/// [`make_static_array`] for values used as ids.
pub fn make_id<const D: usize>(id: impl CompatibleArray<D>) -> Id<D> {
    make_static_array(id)
}

/// [`make_static_array`] for values used as ranges.
pub fn make_range<const D: usize>(range: impl CompatibleArray<D>) -> Range<D> {
    make_static_array(range)
}

fn embed_in_3d<const D: usize>(array: impl CompatibleArray<D>, pad: usize) -> StaticArray<3> {
    const {
        assert!(D >= 1 && D <= 3, "dimension must be between 1 and 3");
    }
    let mut embedded = StaticArray::<3>::splat(pad);
    for dim in 0..D {
        embedded[3 - D + dim] = array.component(dim);
    }
    embedded
}

fn extract_from_3d<const D: usize>(array: StaticArray<3>) -> StaticArray<D> {
    const {
        assert!(D >= 1 && D <= 3, "dimension must be between 1 and 3");
    }
    StaticArray::from_array(std::array::from_fn(|dim| array[3 - D + dim]))
}

/// Embed an id in three dimensions: `(i0)` becomes `(0, 0, i0)` and `(i0, i1)` becomes
/// `(0, i0, i1)`. Three dimensional ids are returned unchanged.
pub fn embed_in_id3<const D: usize>(id: impl CompatibleArray<D>) -> Id<3> {
    embed_in_3d(id, 0)
}

/// Embed a range in three dimensions: `(r0)` becomes `(1, 1, r0)` and `(r0, r1)` becomes
/// `(1, r0, r1)`. Three dimensional ranges are returned unchanged.
pub fn embed_in_range3<const D: usize>(range: impl CompatibleArray<D>) -> Range<3> {
    embed_in_3d(range, 1)
}

/// Keep the trailing `D` components of a three dimensional id.
pub fn extract_from_id3<const D: usize>(id: Id<3>) -> Id<D> {
    extract_from_3d(id)
}

/// Keep the trailing `D` components of a three dimensional range.
pub fn extract_from_range3<const D: usize>(range: Range<3>) -> Range<D> {
    extract_from_3d(range)
}
